//! Error types for the API client

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the service
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to build the HTTP client or validate the configuration
    #[error("Client initialization failed: {0}")]
    InitializationError(String),

    /// The HTTP exchange itself failed (connection, TLS, timeout, body read)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-2xx status on a JSON endpoint
    #[error("HTTP status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body, kept so callers can inspect the service's own error fields
        body: String,
    },

    /// A JSON endpoint returned a body that is not valid JSON
    #[error("Failed to decode JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A local file could not be read or written
    #[error("Cannot access {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::FileAccess {
            path: path.into(),
            source,
        }
    }

    /// HTTP status carried by this error, if the service produced one
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_reports_code_and_body() {
        let err = Error::Status {
            status: 404,
            body: r#"{"error":"not found"}"#.to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn file_access_names_the_path() {
        let err = Error::file_access(
            "/tmp/missing.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.to_string().contains("/tmp/missing.txt"));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn decode_error_converts_from_serde() {
        let parse = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err: Error = parse.into();
        assert!(matches!(err, Error::Decode(_)));
    }
}

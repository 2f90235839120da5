//! Response decoding.
//!
//! The decoding mode is chosen by the caller, never sniffed from the body: a
//! JSON error page returned for an image endpoint stays raw bytes, and an HTML
//! error page returned for a JSON endpoint is a decode error.

use reqwest::blocking::Response;
use serde_json::Value;

use crate::error::{Error, Result};

/// How the body of a completed request is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    /// Parse as JSON; non-2xx statuses are errors
    Json,
    /// Return the body as text, unmodified
    Text,
    /// Return the body as bytes, unmodified
    Binary,
}

/// A decoded response in whichever form its mode produced
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Json(Value),
    Text(String),
    Binary(Vec<u8>),
}

impl ApiResponse {
    pub fn mode(&self) -> ResponseMode {
        match self {
            ApiResponse::Json(_) => ResponseMode::Json,
            ApiResponse::Text(_) => ResponseMode::Text,
            ApiResponse::Binary(_) => ResponseMode::Binary,
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ApiResponse::Json(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_json(self) -> Option<Value> {
        match self {
            ApiResponse::Json(v) => Some(v),
            _ => None,
        }
    }

    /// Raw body for text and binary responses
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            ApiResponse::Text(s) => Some(s.as_bytes()),
            ApiResponse::Binary(b) => Some(b),
            ApiResponse::Json(_) => None,
        }
    }
}

/// Parse a complete body as JSON. Invalid input is an error, never a partial value.
pub fn parse_json(body: &[u8]) -> Result<Value> {
    Ok(serde_json::from_slice(body)?)
}

pub(crate) fn json_body(response: Response) -> Result<Value> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text()?;
        return Err(Error::Status {
            status: status.as_u16(),
            body,
        });
    }

    let body = response.bytes()?;
    parse_json(&body)
}

pub(crate) fn text_body(response: Response) -> Result<String> {
    Ok(response.text()?)
}

pub(crate) fn binary_body(response: Response) -> Result<Vec<u8>> {
    Ok(response.bytes()?.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_json() {
        let v = parse_json(br#"{"id": 42, "status": "finished"}"#).unwrap();
        assert_eq!(v["id"], 42);
        assert_eq!(v["status"], "finished");
    }

    #[test]
    fn remote_error_fields_pass_through() {
        let v = parse_json(br#"{"error": "Invalid instance ID", "status": "error"}"#).unwrap();
        assert_eq!(v["error"], "Invalid instance ID");
    }

    #[test]
    fn rejects_html_body() {
        let err = parse_json(b"<html>error</html>").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn rejects_truncated_json() {
        assert!(parse_json(br#"{"id": 42, "status": "fin"#).is_err());
        assert!(parse_json(b"").is_err());
    }

    #[test]
    fn api_response_accessors() {
        let json = ApiResponse::Json(serde_json::json!({"a": 1}));
        assert_eq!(json.mode(), ResponseMode::Json);
        assert_eq!(json.as_json().unwrap()["a"], 1);
        assert!(json.as_bytes().is_none());

        let png = ApiResponse::Binary(vec![0x89, b'P', b'N', b'G']);
        assert_eq!(png.mode(), ResponseMode::Binary);
        assert_eq!(png.as_bytes(), Some(&[0x89, b'P', b'N', b'G'][..]));
        assert!(png.clone().into_json().is_none());

        let html = ApiResponse::Text("<html></html>".into());
        assert_eq!(html.as_bytes(), Some(&b"<html></html>"[..]));
    }
}

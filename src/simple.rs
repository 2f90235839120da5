//! One-call screenshot retrieval.
//!
//! Unlike every other action, these helpers never return an error: failures
//! are folded into a status-coded result. Only a 200 reply is a capture; any
//! other reply keeps its HTTP status as a failure; anything else (bad target URL, connection failure, unreadable body,
//! failed file write) reports [`FALLBACK_STATUS`]. Failed results never carry
//! image bytes.

use std::path::{Path, PathBuf};

use log::warn;
use reqwest::StatusCode;
use url::Url;

use crate::client::BrowshotClient;
use crate::params::Params;

/// Action path of the one-call endpoint
pub const SIMPLE_ACTION: &str = "simple";

/// Status reported when no HTTP status is available for a failure
pub const FALLBACK_STATUS: u16 = 400;

/// Outcome of [`BrowshotClient::simple`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleResult {
    Captured { status_code: u16, image: Vec<u8> },
    Failed { status_code: u16 },
}

impl SimpleResult {
    /// 200 for a capture, otherwise the failure status
    pub fn status_code(&self) -> u16 {
        match self {
            SimpleResult::Captured { status_code, .. } | SimpleResult::Failed { status_code } => {
                *status_code
            }
        }
    }

    /// Image bytes; empty for a failed result
    pub fn image(&self) -> &[u8] {
        match self {
            SimpleResult::Captured { image, .. } => image,
            SimpleResult::Failed { .. } => &[],
        }
    }

    /// Whether an image was captured
    pub fn is_success(&self) -> bool {
        matches!(self, SimpleResult::Captured { .. })
    }

    /// Take the image bytes; empty for a failed result
    pub fn into_image(self) -> Vec<u8> {
        match self {
            SimpleResult::Captured { image, .. } => image,
            SimpleResult::Failed { .. } => Vec::new(),
        }
    }
}

/// Outcome of [`BrowshotClient::simple_file`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleFileResult {
    pub status_code: u16,
    /// Where the image was written; `None` when nothing was saved
    pub file: Option<PathBuf>,
}

impl BrowshotClient {
    /// Retrieve a screenshot of `url` in a single request.
    ///
    /// Screenshots are cached by the service for 24 hours unless `cache` is
    /// set in `params`.
    pub fn simple(&self, url: &str, params: &Params) -> SimpleResult {
        if let Err(e) = Url::parse(url) {
            warn!("simple: invalid target URL '{}': {}", url, e);
            return SimpleResult::Failed {
                status_code: FALLBACK_STATUS,
            };
        }

        let request_url = self.build_url(SIMPLE_ACTION, &params.merged("url", url));
        let res = match self.http.get(request_url).send() {
            Ok(res) => res,
            Err(e) => {
                warn!("simple: request failed: {}", e);
                return SimpleResult::Failed {
                    status_code: e.status().map(|s| s.as_u16()).unwrap_or(FALLBACK_STATUS),
                };
            }
        };

        let status = res.status();
        if status != StatusCode::OK {
            warn!("simple: service answered {}", status);
            return SimpleResult::Failed {
                status_code: status.as_u16(),
            };
        }

        match res.bytes() {
            Ok(body) => SimpleResult::Captured {
                status_code: StatusCode::OK.as_u16(),
                image: body.to_vec(),
            },
            Err(e) => {
                warn!("simple: failed to read body: {}", e);
                SimpleResult::Failed {
                    status_code: FALLBACK_STATUS,
                }
            }
        }
    }

    /// Retrieve a screenshot of `url` and save it to `file`.
    pub fn simple_file(&self, url: &str, file: impl AsRef<Path>, params: &Params) -> SimpleFileResult {
        let file = file.as_ref();
        let result = self.simple(url, params);

        if result.image().is_empty() {
            return SimpleFileResult {
                status_code: result.status_code(),
                file: None,
            };
        }

        match std::fs::write(file, result.image()) {
            Ok(()) => SimpleFileResult {
                status_code: result.status_code(),
                file: Some(file.to_path_buf()),
            },
            Err(e) => {
                warn!("simple: cannot write {}: {}", file.display(), e);
                SimpleFileResult {
                    status_code: FALLBACK_STATUS,
                    file: None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_result_has_no_image() {
        let r = SimpleResult::Failed { status_code: 404 };
        assert_eq!(r.status_code(), 404);
        assert!(r.image().is_empty());
        assert!(!r.is_success());
        assert!(r.into_image().is_empty());
    }

    #[test]
    fn captured_result_exposes_image() {
        let r = SimpleResult::Captured {
            status_code: 200,
            image: vec![1, 2, 3],
        };
        assert!(r.is_success());
        assert_eq!(r.image(), &[1, 2, 3]);
    }

    #[test]
    fn malformed_target_url_fails_without_request() {
        // Base points at a closed port; the URL check must short-circuit first.
        let client = BrowshotClient::with_config(crate::ClientConfig {
            base_url: "http://127.0.0.1:9/api/v1/".into(),
            ..Default::default()
        })
        .unwrap();

        let r = client.simple("http://", &Params::new());
        assert_eq!(r, SimpleResult::Failed { status_code: 400 });

        let r = client.simple("", &Params::new());
        assert_eq!(r.status_code(), 400);
    }

    #[test]
    fn simple_file_skips_write_on_failure() {
        let client = BrowshotClient::new("key").unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shot.png");

        let r = client.simple_file("not a url", &path, &Params::new());
        assert_eq!(r.status_code, 400);
        assert!(r.file.is_none());
        assert!(!path.exists());
    }
}

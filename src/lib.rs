//! Browshot API client
//!
//! A blocking client for the Browshot web service, which renders screenshots
//! of web pages on remote browser instances. Each remote action is one method
//! on [`BrowshotClient`]; the method builds a signed GET (or a multipart POST
//! for batch uploads) and decodes the reply.
//!
//! # Response modes
//!
//! - **JSON**: `*/list`, `*/info`, `*/create`, `screenshot/search`,
//!   `screenshot/delete`, `account/info`. Non-2xx replies and bodies that are
//!   not JSON are errors. Errors reported by the service inside a JSON body
//!   (`error`/`status` keys) are returned as ordinary values.
//! - **Binary / text**: `screenshot/thumbnail` and `screenshot/html` return
//!   the body unmodified.
//! - **One-call**: [`BrowshotClient::simple`] never fails; it returns a
//!   [`SimpleResult`] carrying a status code.
//!
//! The client keeps no per-call state. Calls are independent, and a shared
//! client can be used from several threads.
//!
//! # Example
//!
//! ```no_run
//! use browshot::{BrowshotClient, ClientConfig, Params};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = BrowshotClient::with_config(ClientConfig {
//!     api_key: "my_api_key".to_string(),
//!     debug: true,
//!     ..Default::default()
//! })?;
//!
//! let shot = client.screenshot_create("https://example.com/", &Params::new().with("instance_id", 12))?;
//! println!("screenshot #{} is {}", shot["id"], shot["status"]);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

pub mod actions;
pub mod client;
pub mod error;
pub mod params;
pub mod query;
pub mod response;
pub mod simple;
pub mod upload;

pub use client::BrowshotClient;
pub use error::{Error, Result};
pub use params::{ParamValue, Params};
pub use query::{encode_query, UrlBuilder};
pub use response::{parse_json, ApiResponse, ResponseMode};
pub use simple::{SimpleFileResult, SimpleResult};

/// API version handled by this client. Newer request arguments within the
/// same major version usually work without an update.
pub const API_VERSION: &str = "1.21";

/// Default endpoint prefix for every action
pub const DEFAULT_BASE_URL: &str = "https://api.browshot.com/api/v1/";

/// Client configuration
///
/// Fixed once the client is built. Fields missing from a deserialized config
/// take their defaults.
///
/// # Examples
///
/// ```
/// let cfg = browshot::ClientConfig::default();
/// assert!(cfg.base_url.starts_with("https://"));
/// assert!(!cfg.debug);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API key sent as `key=` on every request
    pub api_key: String,
    /// Prefix every action path is appended to. Keep HTTPS: the key travels
    /// in the query string.
    pub base_url: String,
    /// Log every request URL (at `info`) before it is sent
    pub debug: bool,
    /// Transport timeout in milliseconds
    pub timeout_ms: u64,
    /// User agent string sent with requests
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            debug: false,
            timeout_ms: 30000,
            user_agent: format!("browshot-rust/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

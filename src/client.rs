//! The blocking client and its request modes.
//!
//! Each public action in [`crate::actions`] fills a [`Params`] and hands it to
//! one of the modes here. The modes share URL construction but nothing else.

use std::time::Duration;

use log::debug;
use reqwest::blocking::{Client, Response};
use serde_json::Value;
use url::Url;

use crate::error::{Error, Result};
use crate::params::Params;
use crate::query::UrlBuilder;
use crate::response::{self, ApiResponse, ResponseMode};
use crate::{ClientConfig, API_VERSION};

/// Client for the screenshot service API.
///
/// Holds only immutable configuration and a connection pool, so one instance
/// can be shared between threads.
#[derive(Debug, Clone)]
pub struct BrowshotClient {
    config: ClientConfig,
    pub(crate) http: Client,
    urls: UrlBuilder,
}

impl BrowshotClient {
    /// Create a client for `api_key` with every other setting at its default
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig {
            api_key: api_key.into(),
            ..Default::default()
        })
    }

    /// Create a client from a full configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Url::parse(&config.base_url).map_err(|e| {
            Error::InitializationError(format!("Invalid base URL '{}': {}", config.base_url, e))
        })?;

        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| {
                Error::InitializationError(format!("Failed to build HTTP client: {}", e))
            })?;

        let urls = UrlBuilder::new(config.base_url.clone(), config.api_key.clone(), config.debug);

        Ok(Self { config, http, urls })
    }

    /// Configuration the client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// API version handled by this client
    pub fn api_version(&self) -> &'static str {
        API_VERSION
    }

    /// Full request URL for `action`, including the API key
    pub fn build_url(&self, action: &str, params: &Params) -> String {
        self.urls.build(action, params)
    }

    pub(crate) fn get(&self, action: &str, params: &Params, mode: ResponseMode) -> Result<Response> {
        let url = self.build_url(action, params);
        debug!("GET {} ({:?})", action, mode);
        Ok(self.http.get(url).send()?)
    }

    /// GET `action` and decode the body as JSON
    pub fn get_json(&self, action: &str, params: &Params) -> Result<Value> {
        response::json_body(self.get(action, params, ResponseMode::Json)?)
    }

    /// GET `action` and return the body as text
    pub fn get_text(&self, action: &str, params: &Params) -> Result<String> {
        response::text_body(self.get(action, params, ResponseMode::Text)?)
    }

    /// GET `action` and return the raw body
    pub fn get_bytes(&self, action: &str, params: &Params) -> Result<Vec<u8>> {
        response::binary_body(self.get(action, params, ResponseMode::Binary)?)
    }

    /// GET `action` and decode according to `mode`
    pub fn fetch(&self, action: &str, params: &Params, mode: ResponseMode) -> Result<ApiResponse> {
        Ok(match mode {
            ResponseMode::Json => ApiResponse::Json(self.get_json(action, params)?),
            ResponseMode::Text => ApiResponse::Text(self.get_text(action, params)?),
            ResponseMode::Binary => ApiResponse::Binary(self.get_bytes(action, params)?),
        })
    }
}

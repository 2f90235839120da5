//! One method per remote action.
//!
//! Method names follow the action paths: `screenshot/create` becomes
//! [`BrowshotClient::screenshot_create`], `instance/list` becomes
//! [`BrowshotClient::instance_list`], and so on. Arguments not named in a
//! signature go in `params` exactly as the service documents them.
//!
//! The service reports its own failures (unknown ID, invalid argument, ...) as
//! JSON with `error` and `status` keys. Those come back as ordinary values.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::client::BrowshotClient;
use crate::error::{Error, Result};
use crate::params::Params;

impl BrowshotClient {
    /// List of instances available to the account
    pub fn instance_list(&self) -> Result<Value> {
        self.get_json("instance/list", &Params::new())
    }

    /// Details of one instance
    pub fn instance_info(&self, id: u64) -> Result<Value> {
        self.get_json("instance/info", &Params::new().with("id", id))
    }

    /// Create a private instance (`width`, `height`, `browser_id`, ...)
    pub fn instance_create(&self, params: &Params) -> Result<Value> {
        self.get_json("instance/create", params)
    }

    /// List of browsers keyed by ID
    pub fn browser_list(&self) -> Result<Value> {
        self.get_json("browser/list", &Params::new())
    }

    /// Details of one browser
    pub fn browser_info(&self, id: u64) -> Result<Value> {
        self.get_json("browser/info", &Params::new().with("id", id))
    }

    /// Create a custom browser (`user_agent`, `javascript`, `mobile`, ...)
    pub fn browser_create(&self, params: &Params) -> Result<Value> {
        self.get_json("browser/create", params)
    }

    /// Request a screenshot of `url`
    pub fn screenshot_create(&self, url: &str, params: &Params) -> Result<Value> {
        self.get_json("screenshot/create", &params.merged("url", url))
    }

    /// Status and details of a screenshot
    pub fn screenshot_info(&self, id: u64, params: &Params) -> Result<Value> {
        self.get_json("screenshot/info", &params.merged("id", id))
    }

    /// Most recent screenshots of the account
    pub fn screenshot_list(&self, params: &Params) -> Result<Value> {
        self.get_json("screenshot/list", params)
    }

    /// Host a screenshot or thumbnail (`hosting`, `width`, `height`, ...)
    pub fn screenshot_host(&self, id: u64, params: &Params) -> Result<Value> {
        self.get_json("screenshot/host", &params.merged("id", id))
    }

    /// Make a screenshot public and return its share URL
    pub fn screenshot_share(&self, id: u64, params: &Params) -> Result<Value> {
        self.get_json("screenshot/share", &params.merged("id", id))
    }

    /// Search earlier screenshots whose URL matches `url`
    pub fn screenshot_search(&self, url: &str, params: &Params) -> Result<Value> {
        self.get_json("screenshot/search", &params.merged("url", url))
    }

    /// Delete the image or metadata of a screenshot
    pub fn screenshot_delete(&self, id: u64, params: &Params) -> Result<Value> {
        self.get_json("screenshot/delete", &params.merged("id", id))
    }

    /// Screenshot image, or a thumbnail of it when sizing arguments are given.
    ///
    /// The body is returned as-is; the status code is not inspected.
    pub fn screenshot_thumbnail(&self, id: u64, params: &Params) -> Result<Vec<u8>> {
        self.get_bytes("screenshot/thumbnail", &params.merged("id", id))
    }

    /// Fetch a thumbnail and write it to `file`, returning the path written
    pub fn screenshot_thumbnail_file(
        &self,
        id: u64,
        file: impl AsRef<Path>,
        params: &Params,
    ) -> Result<PathBuf> {
        let file = file.as_ref();
        let image = self.screenshot_thumbnail(id, params)?;
        std::fs::write(file, image).map_err(|e| Error::file_access(file, e))?;
        Ok(file.to_path_buf())
    }

    /// HTML of the rendered page
    pub fn screenshot_html(&self, id: u64, params: &Params) -> Result<String> {
        self.get_text("screenshot/html", &params.merged("id", id))
    }

    /// Request screenshots of several URLs on several instances.
    ///
    /// Pass the targets as `urls` and the instances as `instances`; both are
    /// expanded into repeated query entries in the order given.
    pub fn screenshot_multiple(&self, params: &Params) -> Result<Value> {
        self.get_json("screenshot/multiple", params)
    }

    /// Start a batch job from a local text file of URLs
    pub fn batch_create(&self, file: Option<&Path>, params: &Params) -> Result<Value> {
        self.submit("batch/create", params, file)
    }

    /// Status of a batch job
    pub fn batch_info(&self, id: u64, params: &Params) -> Result<Value> {
        self.get_json("batch/info", &params.merged("id", id))
    }

    /// Crawl `domain` starting from the `url` given in `params`
    pub fn crawl_create(&self, domain: &str, params: &Params) -> Result<Value> {
        self.get_json("crawl/create", &params.merged("domain", domain))
    }

    /// Status of a crawl job
    pub fn crawl_info(&self, id: u64, params: &Params) -> Result<Value> {
        self.get_json("crawl/info", &params.merged("id", id))
    }

    /// Balance, usage and settings of the account
    pub fn account_info(&self, params: &Params) -> Result<Value> {
        self.get_json("account/info", params)
    }
}

//! Multipart submission for batch jobs.

use std::path::Path;

use log::debug;
use reqwest::blocking::multipart::{Form, Part};
use serde_json::Value;

use crate::client::BrowshotClient;
use crate::error::{Error, Result};
use crate::params::Params;
use crate::response;

/// Name of the multipart field carrying the uploaded file
pub const FILE_FIELD: &str = "file";

impl BrowshotClient {
    /// Submit `action`, uploading `file` when one is given.
    ///
    /// Without a file this is a plain JSON-mode GET. With a file the request
    /// becomes a multipart POST whose only field is the file; parameters stay
    /// in the URL. The file is read fully before the request is built, so a
    /// missing or unreadable file fails without touching the network.
    pub fn submit(&self, action: &str, params: &Params, file: Option<&Path>) -> Result<Value> {
        let Some(path) = file else {
            return self.get_json(action, params);
        };

        let contents = std::fs::read(path).map_err(|e| Error::file_access(path, e))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| FILE_FIELD.to_string());

        let form = Form::new().part(FILE_FIELD, Part::bytes(contents).file_name(file_name));

        let url = self.build_url(action, params);
        debug!("POST {} (multipart, {})", action, path.display());
        let res = self.http.post(url).multipart(form).send()?;

        response::json_body(res)
    }
}

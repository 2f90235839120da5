//! Query encoding and request URL construction.

use log::info;

use crate::params::{ParamValue, Params};

/// Keys whose list values expand into repeated entries under another name.
const EXPANDED_KEYS: &[(&str, &str)] = &[("urls", "url"), ("instances", "instance_id")];

fn expanded_name(key: &str) -> Option<&'static str> {
    EXPANDED_KEYS
        .iter()
        .find(|(plural, _)| *plural == key)
        .map(|(_, single)| *single)
}

fn items(value: &ParamValue) -> &[String] {
    match value {
        ParamValue::Scalar(s) => std::slice::from_ref(s),
        ParamValue::List(items) => items,
    }
}

/// Encode a parameter set as `&key=value` pairs, percent-encoding both sides.
///
/// `urls` becomes one `url=` entry per element and `instances` one
/// `instance_id=` entry per element, in the order given. Every other key maps
/// to exactly one entry.
pub fn encode_query(params: &Params) -> String {
    let mut query = String::new();

    for (key, value) in params.iter() {
        match expanded_name(key) {
            Some(name) => {
                for item in items(value) {
                    push_pair(&mut query, name, item);
                }
            }
            None => push_pair(&mut query, key, &value.to_query_value()),
        }
    }

    query
}

fn push_pair(query: &mut String, key: &str, value: &str) {
    query.push('&');
    query.push_str(&urlencoding::encode(key));
    query.push('=');
    query.push_str(&urlencoding::encode(value));
}

/// Composes `base + action + ?key=<api key>` followed by the encoded parameters.
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    base: String,
    key: String,
    debug: bool,
}

impl UrlBuilder {
    /// Builder for `base`, signing every URL with `key`
    pub fn new(base: impl Into<String>, key: impl Into<String>, debug: bool) -> Self {
        Self {
            base: base.into(),
            key: key.into(),
            debug,
        }
    }

    /// Full URL for `action`; logged at `info` when debug is on
    pub fn build(&self, action: &str, params: &Params) -> String {
        let mut url = format!(
            "{}{}?key={}",
            self.base,
            action,
            urlencoding::encode(&self.key)
        );
        url.push_str(&encode_query(params));

        if self.debug {
            info!("{}", url);
        }

        url
    }
}

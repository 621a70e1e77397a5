//! Request descriptors.
//!
//! A [`RequestDescriptor`] is a value describing one outbound call: path,
//! method, query parameters and body. It is built once (usually by
//! [`crate::endpoints::Endpoint::descriptor`]) and consumed exactly once by
//! [`crate::client::SpotifyClient::execute`].

use crate::types::{Method, ParamValue};
use crate::utils::add_trailing_slash;

/// Body of an outbound request.
#[derive(Debug, Clone)]
pub enum RequestBody {
    /// Serialized as JSON with `Content-Type: application/json`.
    Json(serde_json::Value),
    /// Sent verbatim with the given content type, e.g. a base64-encoded
    /// JPEG for the playlist cover upload.
    Raw { content_type: String, data: String },
}

/// Describes one call to the Web API.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    /// Target path, absolute or relative to the client's base URL.
    pub url: String,
    pub method: Method,
    /// Ordered query parameters, percent-encoded at assembly time.
    pub params: Vec<(String, ParamValue)>,
    pub body: Option<RequestBody>,
}

impl RequestDescriptor {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        RequestDescriptor {
            url: url.into(),
            method,
            params: Vec::new(),
            body: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        RequestDescriptor::new(Method::Get, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        RequestDescriptor::new(Method::Post, url)
    }

    pub fn put(url: impl Into<String>) -> Self {
        RequestDescriptor::new(Method::Put, url)
    }

    pub fn delete(url: impl Into<String>) -> Self {
        RequestDescriptor::new(Method::Delete, url)
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Appends the parameter only when a value is present.
    pub fn opt_param<V: Into<ParamValue>>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(RequestBody::Json(body));
        self
    }

    pub fn raw(mut self, content_type: impl Into<String>, data: impl Into<String>) -> Self {
        self.body = Some(RequestBody::Raw {
            content_type: content_type.into(),
            data: data.into(),
        });
        self
    }

    /// Assembles the final request URL against `base_url`.
    ///
    /// Relative paths are joined onto the base. When query parameters exist
    /// the path gains a trailing slash first (idempotent, prevents malformed
    /// joins) and each key and value is percent-encoded; list values are
    /// comma-joined before encoding.
    pub fn request_url(&self, base_url: &str) -> String {
        let mut url = if self.url.starts_with("http://") || self.url.starts_with("https://") {
            self.url.clone()
        } else {
            format!("{}{}", base_url.trim_end_matches('/'), self.url)
        };

        if !self.params.is_empty() {
            url = add_trailing_slash(&url);
            let query: Vec<String> = self
                .params
                .iter()
                .map(|(key, value)| {
                    format!(
                        "{}={}",
                        urlencoding::encode(key),
                        urlencoding::encode(&value.to_query_value())
                    )
                })
                .collect();
            url.push('?');
            url.push_str(&query.join("&"));
        }

        url
    }
}

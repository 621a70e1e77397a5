//! The Spotify Web API client.
//!
//! [`SpotifyClient`] owns the request pipeline: it obtains a usable bearer
//! token from [`Auth`] (refreshing when required and permitted), assembles
//! the outbound request from a [`RequestDescriptor`], dispatches it through
//! the injected [`Transport`], and classifies the response. Endpoint calls
//! go through [`SpotifyClient::send`] with an [`Endpoint`] value.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::auth::Auth;
use crate::config::{ClientOptions, DEFAULT_API_URL};
use crate::endpoints::Endpoint;
use crate::error::{Error, Result};
use crate::request::{RequestBody, RequestDescriptor};
use crate::transport::{HttpTransport, Transport, TransportRequest};

/// A decoded response body: parsed JSON when the response declared a JSON
/// content type, the raw text otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(serde_json::Value),
    Text(String),
}

impl Payload {
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Json(_) => None,
            Payload::Text(text) => Some(text),
        }
    }

    /// Decodes the payload into a concrete response model.
    pub fn json<T: DeserializeOwned>(self) -> Result<T> {
        match self {
            Payload::Json(value) => Ok(serde_json::from_value(value)?),
            Payload::Text(text) => Ok(serde_json::from_str(&text)?),
        }
    }
}

pub struct SpotifyClient {
    base_url: String,
    transport: Arc<dyn Transport>,
    auth: Mutex<Auth>,
}

impl SpotifyClient {
    /// Creates a client from the given options. The transport defaults to
    /// [`HttpTransport`] when none is supplied; the base URL defaults to
    /// [`DEFAULT_API_URL`].
    pub fn new(options: ClientOptions) -> Self {
        let transport: Arc<dyn Transport> = options
            .transport
            .unwrap_or_else(|| Arc::new(HttpTransport::new()));

        SpotifyClient {
            base_url: options
                .base_url
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            auth: Mutex::new(Auth::new(Arc::clone(&transport), options.auth)),
            transport,
        }
    }

    /// The configured Web API base URL.
    pub fn api_url(&self) -> &str {
        &self.base_url
    }

    /// Access to the token authority, e.g. to set an access token obtained
    /// elsewhere or trigger an explicit credentials exchange.
    pub fn auth(&self) -> &Mutex<Auth> {
        &self.auth
    }

    /// Swaps the HTTP transport. Takes effect on the next call.
    pub fn set_transport(&mut self, transport: Arc<dyn Transport>) {
        self.transport = Arc::clone(&transport);
        self.auth.get_mut().set_transport(transport);
    }

    /// Dispatches an endpoint call and returns its payload unchanged.
    pub async fn send(&self, endpoint: Endpoint) -> Result<Payload> {
        self.execute(endpoint.descriptor()?).await
    }

    /// Executes one described request against the Web API.
    ///
    /// When no non-expired access token is set, a refresh is attempted first
    /// if `refresh_expired_access_token` permits it; otherwise the call
    /// fails with [`Error::NoUsableToken`] before touching the network.
    pub async fn execute(&self, descriptor: RequestDescriptor) -> Result<Payload> {
        let token = {
            let mut auth = self.auth.lock().await;
            if !auth.has_access_token() || auth.is_access_token_expired() {
                if !auth.refresh_expired_access_token {
                    return Err(Error::NoUsableToken);
                }
                auth.refresh_access_token(None).await?;
            }
            auth.access_token().ok_or(Error::NoUsableToken)?.to_string()
        };

        let url = descriptor.request_url(&self.base_url);
        let mut headers = vec![("Authorization".to_string(), format!("Bearer {token}"))];
        let body = match descriptor.body {
            Some(RequestBody::Json(value)) => {
                headers.push(("Content-Type".to_string(), "application/json".to_string()));
                Some(serde_json::to_string(&value)?)
            }
            Some(RequestBody::Raw { content_type, data }) => {
                headers.push(("Content-Type".to_string(), content_type));
                Some(data)
            }
            None => None,
        };

        debug!(method = descriptor.method.as_str(), url = %url, "dispatching request");
        let response = self
            .transport
            .send(TransportRequest {
                method: descriptor.method,
                url: url.clone(),
                headers,
                body,
            })
            .await?;

        if response.is_ok() {
            if response.is_json() {
                return Ok(Payload::Json(serde_json::from_str(&response.body)?));
            }
            return Ok(Payload::Text(response.body));
        }

        warn!(status = response.status, url = %url, "request failed");
        let message = match serde_json::from_str::<serde_json::Value>(&response.body) {
            Ok(envelope) => envelope["error"]["message"].as_str().map(str::to_string),
            Err(_) => None,
        };

        Err(Error::Api {
            url,
            status: response.status,
            status_text: response.status_text,
            message,
        })
    }
}

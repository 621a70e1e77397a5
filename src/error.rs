//! Error types for the Spotify Web API client.
//!
//! Every failure surfaces as a distinct [`Error`] variant carrying enough
//! context (HTTP status, upstream message) for the caller to act on. Nothing
//! is retried or swallowed inside the crate.

use crate::types::GrantMethod;

/// A convenient Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A client-credentials exchange was attempted without a client ID or
    /// client secret being set. No network call is made in this case.
    #[error("client ID or client secret is missing")]
    MissingCredentials,

    /// The accounts service rejected the token exchange.
    #[error("could not refresh access token - {status}: {status_text}")]
    TokenExchangeFailed { status: u16, status_text: String },

    /// The requested authorization flow is recognized but not implemented.
    #[error("{0} grant is not supported yet")]
    UnsupportedGrant(GrantMethod),

    /// The given string does not name a known authorization flow.
    #[error("no valid auth method provided: {0:?}")]
    InvalidGrantMethod(String),

    /// No non-expired access token is set and expired token refresh is
    /// disabled. Raised before any network call is attempted.
    #[error("no non-expired access token set and expired token refresh is disabled")]
    NoUsableToken,

    /// The Web API answered with a non-2xx status.
    #[error("request to {url} failed with status {status}: {status_text}{}", fmt_upstream(.message))]
    Api {
        url: String,
        status: u16,
        status_text: String,
        message: Option<String>,
    },

    /// The given string is not a valid Spotify ID (22 characters of
    /// `[0-9A-Za-z_-]`).
    #[error("invalid Spotify ID: {0:?}")]
    InvalidId(String),

    /// The underlying HTTP transport failed before a response was received.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A response body that claimed to be JSON could not be decoded.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

fn fmt_upstream(message: &Option<String>) -> String {
    match message {
        Some(m) => format!(" - Message: {m}"),
        None => String::new(),
    }
}

impl Error {
    pub(crate) fn transport<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Transport(Box::new(err))
    }
}

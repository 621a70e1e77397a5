//! Construction options for the Spotify Web API client.
//!
//! All configuration is passed explicitly at construction time; the library
//! never reads environment variables or falls back to ambient globals. Both
//! option structs implement `Default`, so callers typically fill the fields
//! they care about with struct update syntax:
//!
//! ```ignore
//! let client = SpotifyClient::new(ClientOptions {
//!     auth: AuthOptions {
//!         client_id: Some("id".into()),
//!         client_secret: Some("secret".into()),
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! });
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::transport::Transport;
use crate::types::Scope;

/// Root of the Spotify Web API, version 1.
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Token endpoint of the Spotify accounts service.
pub const ACCOUNTS_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Options accepted by [`crate::client::SpotifyClient::new`].
#[derive(Clone, Default)]
pub struct ClientOptions {
    /// Base URL of the Web API. Defaults to [`DEFAULT_API_URL`] when `None`.
    pub base_url: Option<String>,
    /// HTTP transport to dispatch requests through. Defaults to
    /// [`crate::transport::HttpTransport`] when `None`.
    pub transport: Option<Arc<dyn Transport>>,
    /// Initial authentication state.
    pub auth: AuthOptions,
}

/// Initial state for [`crate::auth::Auth`].
#[derive(Clone)]
pub struct AuthOptions {
    /// An access token to use for requests right away.
    pub access_token: Option<String>,
    /// Absolute expiry of `access_token`. Takes precedence over
    /// `access_token_expires_in` when both are given.
    pub access_token_expires_at: Option<DateTime<Utc>>,
    /// Lifetime of `access_token` in seconds, counted from construction.
    pub access_token_expires_in: Option<u64>,
    /// Refresh the access token automatically when a request finds it
    /// missing or expired. Defaults to `true`.
    pub refresh_expired_access_token: bool,
    /// Client ID used for the client credentials grant.
    pub client_id: Option<String>,
    /// Client secret used for the client credentials grant.
    pub client_secret: Option<String>,
    /// Scopes to request during user authorization flows.
    pub scopes: Vec<Scope>,
}

impl Default for AuthOptions {
    fn default() -> Self {
        AuthOptions {
            access_token: None,
            access_token_expires_at: None,
            access_token_expires_in: None,
            refresh_expired_access_token: true,
            client_id: None,
            client_secret: None,
            scopes: Vec::new(),
        }
    }
}

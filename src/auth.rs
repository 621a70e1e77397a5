//! Access token lifecycle management.
//!
//! [`Auth`] answers one question for the request pipeline: "is there a usable
//! access token right now" — and when there is not, obtains one through the
//! OAuth 2.0 client credentials grant, provided a client ID and secret are
//! set. Expiry is tracked as an absolute timestamp; a token without a known
//! expiry is treated as never expiring.

use std::sync::Arc;

use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::config::{ACCOUNTS_TOKEN_URL, AuthOptions};
use crate::error::{Error, Result};
use crate::transport::{Transport, TransportRequest};
use crate::types::{GrantMethod, Method, Scope, TokenResponse};

pub struct Auth {
    access_token: Option<String>,
    access_token_expires_at: Option<DateTime<Utc>>,
    /// Refresh the token automatically when a request finds it missing or
    /// expired.
    pub refresh_expired_access_token: bool,
    client_id: Option<String>,
    client_secret: Option<String>,
    scopes: Vec<Scope>,
    transport: Arc<dyn Transport>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl Auth {
    pub fn new(transport: Arc<dyn Transport>, options: AuthOptions) -> Self {
        let access_token_expires_at = match (
            options.access_token_expires_at,
            options.access_token_expires_in,
        ) {
            (Some(at), _) => Some(at),
            (None, Some(secs)) => Some(Utc::now() + Duration::seconds(secs as i64)),
            (None, None) => None,
        };

        Auth {
            access_token: non_empty(options.access_token),
            access_token_expires_at,
            refresh_expired_access_token: options.refresh_expired_access_token,
            client_id: non_empty(options.client_id),
            client_secret: non_empty(options.client_secret),
            scopes: options.scopes,
            transport,
        }
    }

    /// Stores an access token. With `Some(secs)` the absolute expiry is
    /// computed as now + `secs`; with `None` any previously stored expiry is
    /// cleared, so the new token never inherits a stale expiry from an
    /// unrelated earlier token.
    pub fn set_access_token(&mut self, access_token: impl Into<String>, expires_in: Option<u64>) {
        self.access_token = Some(access_token.into());
        self.access_token_expires_at =
            expires_in.map(|secs| Utc::now() + Duration::seconds(secs as i64));
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn has_access_token(&self) -> bool {
        self.access_token.is_some()
    }

    /// Removes the token and its expiry together.
    pub fn clear_access_token(&mut self) {
        self.access_token = None;
        self.access_token_expires_at = None;
    }

    pub fn set_access_token_expires_at(&mut self, expires_at: DateTime<Utc>) {
        self.access_token_expires_at = Some(expires_at);
    }

    pub fn access_token_expires_at(&self) -> Option<DateTime<Utc>> {
        self.access_token_expires_at
    }

    /// False when no expiry is set, including when no token is set at all.
    pub fn is_access_token_expired(&self) -> bool {
        match self.access_token_expires_at {
            Some(expires_at) => Utc::now() >= expires_at,
            None => false,
        }
    }

    /// Setting an empty string counts as "not present".
    pub fn set_client_id(&mut self, client_id: impl Into<String>) {
        self.client_id = non_empty(Some(client_id.into()));
    }

    pub fn has_client_id(&self) -> bool {
        self.client_id.is_some()
    }

    /// Setting an empty string counts as "not present".
    pub fn set_client_secret(&mut self, client_secret: impl Into<String>) {
        self.client_secret = non_empty(Some(client_secret.into()));
    }

    pub fn has_client_secret(&self) -> bool {
        self.client_secret.is_some()
    }

    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }

    /// The grant the current credential state supports: client credentials
    /// when both client ID and secret are present, otherwise authorization
    /// code (a default guess, not a promise that the flow is implemented).
    pub fn detect_auth_method(&self) -> GrantMethod {
        if self.has_client_id() && self.has_client_secret() {
            GrantMethod::ClientCredentials
        } else {
            GrantMethod::AuthorizationCode
        }
    }

    /// Refreshes the access token using the given method, or the detected
    /// one when no method is given. Only the client credentials grant is
    /// implemented; the other flows fail with [`Error::UnsupportedGrant`].
    pub async fn refresh_access_token(&mut self, method: Option<GrantMethod>) -> Result<()> {
        let method = method.unwrap_or_else(|| self.detect_auth_method());
        debug!(grant = method.as_str(), "refreshing access token");
        match method {
            GrantMethod::ClientCredentials => self.client_credentials_grant(None, None).await,
            other => Err(Error::UnsupportedGrant(other)),
        }
    }

    /// Exchanges the client ID and secret for an access token.
    ///
    /// Arguments, when given, overwrite the stored credentials first. Fails
    /// with [`Error::MissingCredentials`] before any network call if either
    /// is then absent. On HTTP 200 the returned token and lifetime are
    /// stored; any other status fails with [`Error::TokenExchangeFailed`]
    /// and leaves the stored token untouched.
    pub async fn client_credentials_grant(
        &mut self,
        client_id: Option<&str>,
        client_secret: Option<&str>,
    ) -> Result<()> {
        if let Some(id) = client_id {
            self.set_client_id(id);
        }
        if let Some(secret) = client_secret {
            self.set_client_secret(secret);
        }

        let (Some(id), Some(secret)) = (self.client_id.clone(), self.client_secret.clone()) else {
            return Err(Error::MissingCredentials);
        };

        let basic = STANDARD.encode(format!("{id}:{secret}"));
        let request = TransportRequest {
            method: Method::Post,
            url: ACCOUNTS_TOKEN_URL.to_string(),
            headers: vec![
                ("Authorization".to_string(), format!("Basic {basic}")),
                (
                    "Content-Type".to_string(),
                    "application/x-www-form-urlencoded".to_string(),
                ),
            ],
            body: Some("grant_type=client_credentials".to_string()),
        };

        let response = self.transport.send(request).await?;
        if response.status != 200 {
            return Err(Error::TokenExchangeFailed {
                status: response.status,
                status_text: response.status_text,
            });
        }

        let token: TokenResponse = serde_json::from_str(&response.body)?;
        self.set_access_token(token.access_token, token.expires_in);
        debug!("access token refreshed via client credentials grant");
        Ok(())
    }

    pub(crate) fn set_transport(&mut self, transport: Arc<dyn Transport>) {
        self.transport = transport;
    }
}

//! Spotify Web API Client Library
//!
//! This library provides a typed client for the Spotify Web API. It handles
//! bearer token authentication with automatic refresh through the OAuth 2.0
//! client credentials grant, request construction (query strings, JSON
//! bodies, headers), and response classification, behind a pluggable HTTP
//! transport.
//!
//! # Modules
//!
//! - `auth` - Access token lifecycle and the client credentials grant
//! - `client` - The request executor and generic endpoint dispatch
//! - `config` - Construction options and API URL constants
//! - `endpoints` - The typed table of Web API operations
//! - `error` - Error taxonomy
//! - `request` - Request descriptors and URL assembly
//! - `transport` - The pluggable HTTP transport and its reqwest default
//! - `types` - Shared data structures and type definitions
//! - `utils` - Spotify ID validation and URI helpers
//!
//! # Example
//!
//! ```
//! use spotify_web::{AuthOptions, ClientOptions, Endpoint, SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> spotify_web::Result<()> {
//!     let client = SpotifyClient::new(ClientOptions {
//!         auth: AuthOptions {
//!             client_id: Some("your-client-id".into()),
//!             client_secret: Some("your-client-secret".into()),
//!             ..Default::default()
//!         },
//!         ..Default::default()
//!     });
//!
//!     let album = client
//!         .send(Endpoint::Album {
//!             id: "4aawyAB9vmqN3uQ7FjRGTy".into(),
//!         })
//!         .await?;
//!     println!("{:?}", album.as_json());
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod request;
pub mod transport;
pub mod types;
pub mod utils;

pub use auth::Auth;
pub use client::{Payload, SpotifyClient};
pub use config::{AuthOptions, ClientOptions};
pub use endpoints::Endpoint;
pub use error::{Error, Result};
pub use request::{RequestBody, RequestDescriptor};
pub use transport::{HttpTransport, Transport, TransportRequest, TransportResponse};
pub use types::{
    FollowKind, GrantMethod, LibraryKind, Method, ParamValue, PlayOffset, PlayOptions,
    PlaylistDetails, RecommendationSeeds, RepeatState, Resource, Scope, SearchKind, TokenResponse,
};

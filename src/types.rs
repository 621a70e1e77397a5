use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// HTTP methods used by the Web API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// OAuth 2.0 authorization flows recognized by [`crate::auth::Auth`].
///
/// Only [`GrantMethod::ClientCredentials`] is implemented; the other flows
/// are recognized as distinct methods but refusing them is explicit, never a
/// silent fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantMethod {
    ClientCredentials,
    AuthorizationCode,
    ImplicitGrant,
}

impl GrantMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            GrantMethod::ClientCredentials => "client_credentials",
            GrantMethod::AuthorizationCode => "authorization_code",
            GrantMethod::ImplicitGrant => "implicit_grant",
        }
    }
}

impl fmt::Display for GrantMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GrantMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "client_credentials" => Ok(GrantMethod::ClientCredentials),
            "authorization_code" => Ok(GrantMethod::AuthorizationCode),
            "implicit_grant" => Ok(GrantMethod::ImplicitGrant),
            other => Err(Error::InvalidGrantMethod(other.to_string())),
        }
    }
}

/// Resource types addressable through a `spotify:<type>:<id>` URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Album,
    Artist,
    Playlist,
    Track,
    Show,
    Episode,
}

impl Resource {
    pub const ALL: [Resource; 6] = [
        Resource::Album,
        Resource::Artist,
        Resource::Playlist,
        Resource::Track,
        Resource::Show,
        Resource::Episode,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Album => "album",
            Resource::Artist => "artist",
            Resource::Playlist => "playlist",
            Resource::Track => "track",
            Resource::Show => "show",
            Resource::Episode => "episode",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "album" => Ok(Resource::Album),
            "artist" => Ok(Resource::Artist),
            "playlist" => Ok(Resource::Playlist),
            "track" => Ok(Resource::Track),
            "show" => Ok(Resource::Show),
            "episode" => Ok(Resource::Episode),
            other => Err(Error::InvalidId(other.to_string())),
        }
    }
}

/// OAuth scopes a user can grant to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    UgcImageUpload,
    UserReadPlaybackState,
    UserModifyPlaybackState,
    UserReadCurrentlyPlaying,
    AppRemoteControl,
    Streaming,
    PlaylistReadPrivate,
    PlaylistReadCollaborative,
    PlaylistModifyPrivate,
    PlaylistModifyPublic,
    UserFollowRead,
    UserFollowModify,
    UserReadPlaybackPosition,
    UserReadRecentlyPlayed,
    UserTopRead,
    UserLibraryRead,
    UserLibraryModify,
    UserReadEmail,
    UserReadPrivate,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::UgcImageUpload => "ugc-image-upload",
            Scope::UserReadPlaybackState => "user-read-playback-state",
            Scope::UserModifyPlaybackState => "user-modify-playback-state",
            Scope::UserReadCurrentlyPlaying => "user-read-currently-playing",
            Scope::AppRemoteControl => "app-remote-control",
            Scope::Streaming => "streaming",
            Scope::PlaylistReadPrivate => "playlist-read-private",
            Scope::PlaylistReadCollaborative => "playlist-read-collaborative",
            Scope::PlaylistModifyPrivate => "playlist-modify-private",
            Scope::PlaylistModifyPublic => "playlist-modify-public",
            Scope::UserFollowRead => "user-follow-read",
            Scope::UserFollowModify => "user-follow-modify",
            Scope::UserReadPlaybackPosition => "user-read-playback-position",
            Scope::UserReadRecentlyPlayed => "user-read-recently-played",
            Scope::UserTopRead => "user-top-read",
            Scope::UserLibraryRead => "user-library-read",
            Scope::UserLibraryModify => "user-library-modify",
            Scope::UserReadEmail => "user-read-email",
            Scope::UserReadPrivate => "user-read-private",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single query string value. Lists are joined with commas when the query
/// string is assembled, matching the Web API's batch parameter convention.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Bool(bool),
    List(Vec<String>),
}

impl ParamValue {
    /// Stringifies the value, before percent-encoding.
    pub fn to_query_value(&self) -> String {
        match self {
            ParamValue::Str(s) => s.clone(),
            ParamValue::Int(n) => n.to_string(),
            ParamValue::Bool(b) => b.to_string(),
            ParamValue::List(items) => items.join(","),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(value as i64)
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        ParamValue::Int(value as i64)
    }
}

impl From<u8> for ParamValue {
    fn from(value: u8) -> Self {
        ParamValue::Int(value as i64)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        ParamValue::List(value)
    }
}

impl From<&[&str]> for ParamValue {
    fn from(value: &[&str]) -> Self {
        ParamValue::List(value.iter().map(|s| s.to_string()).collect())
    }
}

/// Result categories accepted by the search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Album,
    Artist,
    Track,
    Playlist,
    Show,
    Episode,
}

impl SearchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchKind::Album => "album",
            SearchKind::Artist => "artist",
            SearchKind::Track => "track",
            SearchKind::Playlist => "playlist",
            SearchKind::Show => "show",
            SearchKind::Episode => "episode",
        }
    }
}

/// The "Your Music" collections that support save/remove/contains batches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryKind {
    Tracks,
    Albums,
    Shows,
}

impl LibraryKind {
    /// Path segment under `/me/` for this collection.
    pub fn path_segment(&self) -> &'static str {
        match self {
            LibraryKind::Tracks => "tracks",
            LibraryKind::Albums => "albums",
            LibraryKind::Shows => "shows",
        }
    }
}

/// What `/me/following` operations act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowKind {
    Artist,
    User,
}

impl FollowKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FollowKind::Artist => "artist",
            FollowKind::User => "user",
        }
    }
}

/// Repeat mode for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatState {
    Track,
    Context,
    Off,
}

impl RepeatState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepeatState::Track => "track",
            RepeatState::Context => "context",
            RepeatState::Off => "off",
        }
    }
}

/// Fields accepted when creating a playlist or changing its details.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaylistDetails {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collaborative: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PlaylistDetails {
    pub fn new(name: impl Into<String>) -> Self {
        PlaylistDetails {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Where playback should start inside a context.
#[derive(Debug, Clone, Serialize)]
pub struct PlayOffset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

/// Options for starting or resuming playback.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PlayOptions {
    #[serde(skip_serializing)]
    pub device_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uris: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<PlayOffset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_ms: Option<u64>,
}

/// Seed parameters for the recommendations endpoint.
#[derive(Debug, Clone, Default)]
pub struct RecommendationSeeds {
    pub seed_artists: Vec<String>,
    pub seed_genres: Vec<String>,
    pub seed_tracks: Vec<String>,
    pub limit: Option<u32>,
    pub market: Option<String>,
}

/// Success body of the accounts service token endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

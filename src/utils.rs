use crate::error::{Error, Result};
use crate::types::Resource;

/// Checks whether `id` is a well-formed Spotify ID: exactly 22 characters
/// drawn from `[0-9A-Za-z_-]`.
pub fn is_spotify_id(id: &str) -> bool {
    id.len() == 22
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

/// Adds a trailing slash to a url if one doesn't exist. Idempotent.
pub fn add_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{url}/")
    }
}

/// Builds the canonical `spotify:<type>:<id>` URI for a resource.
///
/// Fails with [`Error::InvalidId`] when `id` does not pass [`is_spotify_id`];
/// no partial URI is ever produced.
pub fn create_uri(resource: Resource, id: &str) -> Result<String> {
    if !is_spotify_id(id) {
        return Err(Error::InvalidId(id.to_string()));
    }
    Ok(format!("spotify:{resource}:{id}"))
}

/// Builds URIs for a batch of IDs, preserving input order. Fails on the
/// first invalid ID encountered.
pub fn create_uris<S: AsRef<str>>(resource: Resource, ids: &[S]) -> Result<Vec<String>> {
    ids.iter()
        .map(|id| create_uri(resource, id.as_ref()))
        .collect()
}

/// Splits a `spotify:<type>:<id>` URI back into its resource type and ID.
pub fn parse_uri(uri: &str) -> Result<(Resource, String)> {
    let mut parts = uri.splitn(3, ':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("spotify"), Some(resource), Some(id)) if is_spotify_id(id) => {
            Ok((resource.parse()?, id.to_string()))
        }
        _ => Err(Error::InvalidId(uri.to_string())),
    }
}

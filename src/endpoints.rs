//! The Web API endpoint table.
//!
//! Every operation the client supports is one [`Endpoint`] variant carrying
//! its typed parameters; [`Endpoint::descriptor`] is the single mapping from
//! those parameters to the (path, verb, params, body) tuple the executor
//! consumes. Batch results (e.g. the `contains` checks) come back as the
//! API's ordered boolean arrays, passed through unchanged.

use serde_json::json;

use crate::error::Result;
use crate::request::RequestDescriptor;
use crate::types::{
    FollowKind, LibraryKind, PlayOptions, PlaylistDetails, RecommendationSeeds, RepeatState,
    SearchKind,
};

const DEFAULT_MARKET: &str = "ES";

/// One call to the Spotify Web API.
#[derive(Debug, Clone)]
pub enum Endpoint {
    // Catalog: albums, tracks, artists
    Album { id: String },
    AlbumTracks { id: String },
    Albums { ids: Vec<String> },
    Track { id: String },
    Tracks { ids: Vec<String> },
    Artist { id: String },
    Artists { ids: Vec<String> },
    ArtistAlbums { id: String },
    ArtistTopTracks { id: String, country: String },
    ArtistRelatedArtists { id: String },

    // Catalog: shows and episodes
    Show { id: String, market: Option<String> },
    Shows { ids: Vec<String>, market: Option<String> },
    ShowEpisodes { id: String, market: Option<String> },
    Episode { id: String, market: Option<String> },
    Episodes { ids: Vec<String>, market: Option<String> },

    // Catalog: track audio data and recommendations
    AudioFeatures { id: String },
    AudioFeaturesMany { ids: Vec<String> },
    AudioAnalysis { id: String },
    Recommendations { seeds: RecommendationSeeds },
    AvailableGenreSeeds,

    // Browse
    FeaturedPlaylists,
    NewReleases,
    Categories,
    Category { id: String },
    CategoryPlaylists { id: String },

    // Search
    Search { query: String, kinds: Vec<SearchKind> },

    // Users
    Me,
    User { id: String },
    MyTopArtists,
    MyTopTracks,
    RecentlyPlayed,

    // Library ("Your Music"), batched per collection kind
    Saved { kind: LibraryKind },
    Save { kind: LibraryKind, ids: Vec<String> },
    RemoveSaved { kind: LibraryKind, ids: Vec<String> },
    ContainsSaved { kind: LibraryKind, ids: Vec<String> },

    // Social graph
    FollowedArtists,
    Follow { kind: FollowKind, ids: Vec<String> },
    Unfollow { kind: FollowKind, ids: Vec<String> },
    IsFollowing { kind: FollowKind, ids: Vec<String> },
    FollowPlaylist { id: String },
    UnfollowPlaylist { id: String },
    AreFollowingPlaylist { id: String, user_ids: Vec<String> },

    // Playlists
    Playlist { id: String },
    PlaylistItems { id: String },
    PlaylistCoverImage { id: String },
    UserPlaylists { user_id: String },
    MyPlaylists,
    CreatePlaylist { user_id: String, details: PlaylistDetails },
    ChangePlaylistDetails { id: String, details: PlaylistDetails },
    AddItemsToPlaylist { id: String, uris: Vec<String> },
    ReplacePlaylistItems { id: String, uris: Vec<String> },
    ClearPlaylist { id: String },
    ReorderPlaylistItems {
        id: String,
        range_start: u32,
        insert_before: u32,
        range_length: Option<u32>,
        snapshot_id: Option<String>,
    },
    RemoveItemsFromPlaylist {
        id: String,
        uris: Vec<String>,
        snapshot_id: Option<String>,
    },
    RemoveItemsAtPositions {
        id: String,
        positions: Vec<u32>,
        snapshot_id: String,
    },
    /// Body is the base64-encoded JPEG data, sent verbatim as `image/jpeg`.
    UploadPlaylistCoverImage { id: String, jpeg_base64: String },

    // Player
    Devices,
    PlaybackState,
    CurrentlyPlaying,
    TransferPlayback { device_id: String },
    Play { options: PlayOptions },
    Pause { device_id: Option<String> },
    Queue { uri: String, device_id: Option<String> },
    NextTrack { device_id: Option<String> },
    PreviousTrack { device_id: Option<String> },
    Seek { position_ms: u64, device_id: Option<String> },
    SetRepeat { state: RepeatState, device_id: Option<String> },
    SetVolume { volume_percent: u8, device_id: Option<String> },
    SetShuffle { state: bool, device_id: Option<String> },
}

impl Endpoint {
    /// Maps the endpoint onto the request the executor should perform.
    /// Paths are relative to the client's base URL.
    pub fn descriptor(self) -> Result<RequestDescriptor> {
        use Endpoint::*;

        let descriptor = match self {
            Album { id } => RequestDescriptor::get(format!("/albums/{id}")),
            AlbumTracks { id } => RequestDescriptor::get(format!("/albums/{id}/tracks")),
            Albums { ids } => RequestDescriptor::get("/albums").param("ids", ids),
            Track { id } => RequestDescriptor::get(format!("/tracks/{id}")),
            Tracks { ids } => RequestDescriptor::get("/tracks").param("ids", ids),
            Artist { id } => RequestDescriptor::get(format!("/artists/{id}")),
            Artists { ids } => RequestDescriptor::get("/artists").param("ids", ids),
            ArtistAlbums { id } => RequestDescriptor::get(format!("/artists/{id}/albums")),
            ArtistTopTracks { id, country } => {
                RequestDescriptor::get(format!("/artists/{id}/top-tracks"))
                    .param("country", country)
            }
            ArtistRelatedArtists { id } => {
                RequestDescriptor::get(format!("/artists/{id}/related-artists"))
            }

            Show { id, market } => RequestDescriptor::get(format!("/shows/{id}"))
                .param("market", market_or_default(market)),
            Shows { ids, market } => RequestDescriptor::get("/shows")
                .param("ids", ids)
                .param("market", market_or_default(market)),
            ShowEpisodes { id, market } => RequestDescriptor::get(format!("/shows/{id}/episodes"))
                .param("market", market_or_default(market)),
            Episode { id, market } => RequestDescriptor::get(format!("/episodes/{id}"))
                .param("market", market_or_default(market)),
            Episodes { ids, market } => RequestDescriptor::get("/episodes")
                .param("ids", ids)
                .param("market", market_or_default(market)),

            AudioFeatures { id } => RequestDescriptor::get(format!("/audio-features/{id}")),
            AudioFeaturesMany { ids } => {
                RequestDescriptor::get("/audio-features").param("ids", ids)
            }
            AudioAnalysis { id } => RequestDescriptor::get(format!("/audio-analysis/{id}")),
            Recommendations { seeds } => {
                let mut descriptor = RequestDescriptor::get("/recommendations");
                if !seeds.seed_artists.is_empty() {
                    descriptor = descriptor.param("seed_artists", seeds.seed_artists);
                }
                if !seeds.seed_genres.is_empty() {
                    descriptor = descriptor.param("seed_genres", seeds.seed_genres);
                }
                if !seeds.seed_tracks.is_empty() {
                    descriptor = descriptor.param("seed_tracks", seeds.seed_tracks);
                }
                descriptor
                    .opt_param("limit", seeds.limit)
                    .opt_param("market", seeds.market)
            }
            AvailableGenreSeeds => {
                RequestDescriptor::get("/recommendations/available-genre-seeds")
            }

            FeaturedPlaylists => RequestDescriptor::get("/browse/featured-playlists"),
            NewReleases => RequestDescriptor::get("/browse/new-releases"),
            Categories => RequestDescriptor::get("/browse/categories"),
            Category { id } => RequestDescriptor::get(format!("/browse/categories/{id}")),
            CategoryPlaylists { id } => {
                RequestDescriptor::get(format!("/browse/categories/{id}/playlists"))
            }

            Search { query, kinds } => {
                let kinds: Vec<String> =
                    kinds.iter().map(|k| k.as_str().to_string()).collect();
                RequestDescriptor::get("/search")
                    .param("q", query)
                    .param("type", kinds)
            }

            Me => RequestDescriptor::get("/me"),
            User { id } => {
                RequestDescriptor::get(format!("/users/{}", urlencoding::encode(&id)))
            }
            MyTopArtists => RequestDescriptor::get("/me/top/artists"),
            MyTopTracks => RequestDescriptor::get("/me/top/tracks"),
            RecentlyPlayed => RequestDescriptor::get("/me/player/recently-played"),

            Saved { kind } => RequestDescriptor::get(format!("/me/{}", kind.path_segment())),
            Save { kind, ids } => {
                RequestDescriptor::put(format!("/me/{}", kind.path_segment())).json(json!(ids))
            }
            RemoveSaved { kind, ids } => {
                RequestDescriptor::delete(format!("/me/{}", kind.path_segment())).json(json!(ids))
            }
            ContainsSaved { kind, ids } => {
                RequestDescriptor::get(format!("/me/{}/contains", kind.path_segment()))
                    .param("ids", ids)
            }

            FollowedArtists => RequestDescriptor::get("/me/following").param("type", "artist"),
            Follow { kind, ids } => RequestDescriptor::put("/me/following")
                .param("ids", ids)
                .param("type", kind.as_str()),
            Unfollow { kind, ids } => RequestDescriptor::delete("/me/following")
                .param("ids", ids)
                .param("type", kind.as_str()),
            IsFollowing { kind, ids } => RequestDescriptor::get("/me/following/contains")
                .param("ids", ids)
                .param("type", kind.as_str()),
            FollowPlaylist { id } => {
                RequestDescriptor::put(format!("/playlists/{id}/followers"))
            }
            UnfollowPlaylist { id } => {
                RequestDescriptor::delete(format!("/playlists/{id}/followers"))
            }
            AreFollowingPlaylist { id, user_ids } => {
                RequestDescriptor::get(format!("/playlists/{id}/followers/contains"))
                    .param("ids", user_ids)
            }

            Playlist { id } => RequestDescriptor::get(format!("/playlists/{id}")),
            PlaylistItems { id } => RequestDescriptor::get(format!("/playlists/{id}/tracks")),
            PlaylistCoverImage { id } => {
                RequestDescriptor::get(format!("/playlists/{id}/images"))
            }
            UserPlaylists { user_id } => RequestDescriptor::get(format!(
                "/users/{}/playlists",
                urlencoding::encode(&user_id)
            )),
            MyPlaylists => RequestDescriptor::get("/me/playlists"),
            CreatePlaylist { user_id, details } => RequestDescriptor::post(format!(
                "/users/{}/playlists",
                urlencoding::encode(&user_id)
            ))
            .json(serde_json::to_value(details)?),
            ChangePlaylistDetails { id, details } => {
                RequestDescriptor::put(format!("/playlists/{id}"))
                    .json(serde_json::to_value(details)?)
            }
            AddItemsToPlaylist { id, uris } => {
                RequestDescriptor::post(format!("/playlists/{id}/tracks"))
                    .json(json!({ "uris": uris }))
            }
            ReplacePlaylistItems { id, uris } => {
                RequestDescriptor::put(format!("/playlists/{id}/tracks"))
                    .json(json!({ "uris": uris }))
            }
            ClearPlaylist { id } => RequestDescriptor::put(format!("/playlists/{id}/tracks")),
            ReorderPlaylistItems {
                id,
                range_start,
                insert_before,
                range_length,
                snapshot_id,
            } => {
                let mut body = json!({
                    "range_start": range_start,
                    "insert_before": insert_before,
                });
                if let Some(length) = range_length {
                    body["range_length"] = length.into();
                }
                if let Some(snapshot) = snapshot_id {
                    body["snapshot_id"] = snapshot.into();
                }
                RequestDescriptor::put(format!("/playlists/{id}/tracks")).json(body)
            }
            RemoveItemsFromPlaylist {
                id,
                uris,
                snapshot_id,
            } => {
                let tracks: Vec<serde_json::Value> =
                    uris.into_iter().map(|uri| json!({ "uri": uri })).collect();
                let mut body = json!({ "tracks": tracks });
                if let Some(snapshot) = snapshot_id {
                    body["snapshot_id"] = snapshot.into();
                }
                RequestDescriptor::delete(format!("/playlists/{id}/tracks")).json(body)
            }
            RemoveItemsAtPositions {
                id,
                positions,
                snapshot_id,
            } => RequestDescriptor::delete(format!("/playlists/{id}/tracks")).json(json!({
                "positions": positions,
                "snapshot_id": snapshot_id,
            })),
            UploadPlaylistCoverImage { id, jpeg_base64 } => {
                RequestDescriptor::put(format!("/playlists/{id}/images"))
                    .raw("image/jpeg", jpeg_base64)
            }

            Devices => RequestDescriptor::get("/me/player/devices"),
            PlaybackState => RequestDescriptor::get("/me/player"),
            CurrentlyPlaying => RequestDescriptor::get("/me/player/currently-playing"),
            TransferPlayback { device_id } => RequestDescriptor::put("/me/player")
                .json(json!({ "device_ids": [device_id] })),
            Play { options } => {
                let device_id = options.device_id.clone();
                RequestDescriptor::put("/me/player/play")
                    .opt_param("device_id", device_id)
                    .json(serde_json::to_value(options)?)
            }
            Pause { device_id } => {
                RequestDescriptor::put("/me/player/pause").opt_param("device_id", device_id)
            }
            Queue { uri, device_id } => RequestDescriptor::post("/me/player/queue")
                .param("uri", uri)
                .opt_param("device_id", device_id),
            NextTrack { device_id } => {
                RequestDescriptor::post("/me/player/next").opt_param("device_id", device_id)
            }
            PreviousTrack { device_id } => {
                RequestDescriptor::post("/me/player/previous").opt_param("device_id", device_id)
            }
            Seek {
                position_ms,
                device_id,
            } => RequestDescriptor::put("/me/player/seek")
                .param("position_ms", position_ms)
                .opt_param("device_id", device_id),
            SetRepeat { state, device_id } => RequestDescriptor::put("/me/player/repeat")
                .param("state", state.as_str())
                .opt_param("device_id", device_id),
            SetVolume {
                volume_percent,
                device_id,
            } => RequestDescriptor::put("/me/player/volume")
                .param("volume_percent", volume_percent)
                .opt_param("device_id", device_id),
            SetShuffle { state, device_id } => RequestDescriptor::put("/me/player/shuffle")
                .param("state", state)
                .opt_param("device_id", device_id),
        };

        Ok(descriptor)
    }
}

fn market_or_default(market: Option<String>) -> String {
    market.unwrap_or_else(|| DEFAULT_MARKET.to_string())
}

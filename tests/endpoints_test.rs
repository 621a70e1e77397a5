use serde_json::json;
use spotify_web::request::{RequestBody, RequestDescriptor};
use spotify_web::types::{
    FollowKind, LibraryKind, Method, ParamValue, PlayOptions, PlaylistDetails, RepeatState,
    SearchKind,
};
use spotify_web::Endpoint;

fn descriptor(endpoint: Endpoint) -> RequestDescriptor {
    endpoint.descriptor().unwrap()
}

fn json_body(descriptor: &RequestDescriptor) -> serde_json::Value {
    match &descriptor.body {
        Some(RequestBody::Json(value)) => value.clone(),
        other => panic!("expected a JSON body, got {other:?}"),
    }
}

#[test]
fn test_single_catalog_lookups_interpolate_the_id() {
    let d = descriptor(Endpoint::Album {
        id: "4aawyAB9vmqN3uQ7FjRGTy".to_string(),
    });
    assert_eq!(d.method, Method::Get);
    assert_eq!(d.url, "/albums/4aawyAB9vmqN3uQ7FjRGTy");
    assert!(d.params.is_empty());
    assert!(d.body.is_none());

    let d = descriptor(Endpoint::ArtistTopTracks {
        id: "a1".to_string(),
        country: "SE".to_string(),
    });
    assert_eq!(d.url, "/artists/a1/top-tracks");
    assert_eq!(d.params, vec![("country".to_string(), ParamValue::Str("SE".to_string()))]);
}

#[test]
fn test_batch_catalog_lookups_join_ids_in_order() {
    let d = descriptor(Endpoint::Tracks {
        ids: vec!["t1".to_string(), "t2".to_string(), "t3".to_string()],
    });
    assert_eq!(d.url, "/tracks");
    assert_eq!(d.params.len(), 1);
    assert_eq!(d.params[0].0, "ids");
    assert_eq!(d.params[0].1.to_query_value(), "t1,t2,t3");
}

#[test]
fn test_show_lookups_default_the_market() {
    let d = descriptor(Endpoint::Show {
        id: "s1".to_string(),
        market: None,
    });
    assert_eq!(d.params, vec![("market".to_string(), ParamValue::Str("ES".to_string()))]);

    let d = descriptor(Endpoint::Show {
        id: "s1".to_string(),
        market: Some("DE".to_string()),
    });
    assert_eq!(d.params, vec![("market".to_string(), ParamValue::Str("DE".to_string()))]);
}

#[test]
fn test_search_joins_result_kinds() {
    let d = descriptor(Endpoint::Search {
        query: "nirvana".to_string(),
        kinds: vec![SearchKind::Artist, SearchKind::Album],
    });
    assert_eq!(d.url, "/search");
    assert_eq!(d.params[0], ("q".to_string(), ParamValue::Str("nirvana".to_string())));
    assert_eq!(d.params[1].1.to_query_value(), "artist,album");
}

#[test]
fn test_library_batches_cover_all_collection_kinds() {
    let ids = vec!["i1".to_string(), "i2".to_string()];

    let d = descriptor(Endpoint::Save {
        kind: LibraryKind::Tracks,
        ids: ids.clone(),
    });
    assert_eq!(d.method, Method::Put);
    assert_eq!(d.url, "/me/tracks");
    assert_eq!(json_body(&d), json!(["i1", "i2"]));

    let d = descriptor(Endpoint::RemoveSaved {
        kind: LibraryKind::Albums,
        ids: ids.clone(),
    });
    assert_eq!(d.method, Method::Delete);
    assert_eq!(d.url, "/me/albums");
    assert_eq!(json_body(&d), json!(["i1", "i2"]));

    let d = descriptor(Endpoint::ContainsSaved {
        kind: LibraryKind::Shows,
        ids,
    });
    assert_eq!(d.method, Method::Get);
    assert_eq!(d.url, "/me/shows/contains");
    assert_eq!(d.params[0].1.to_query_value(), "i1,i2");
}

#[test]
fn test_follow_operations_carry_the_target_type() {
    let ids = vec!["x1".to_string()];

    let d = descriptor(Endpoint::Follow {
        kind: FollowKind::Artist,
        ids: ids.clone(),
    });
    assert_eq!(d.method, Method::Put);
    assert_eq!(d.url, "/me/following");
    assert_eq!(d.params[1], ("type".to_string(), ParamValue::Str("artist".to_string())));

    let d = descriptor(Endpoint::IsFollowing {
        kind: FollowKind::User,
        ids,
    });
    assert_eq!(d.method, Method::Get);
    assert_eq!(d.url, "/me/following/contains");
    assert_eq!(d.params[1], ("type".to_string(), ParamValue::Str("user".to_string())));

    let d = descriptor(Endpoint::AreFollowingPlaylist {
        id: "pl1".to_string(),
        user_ids: vec!["u1".to_string(), "u2".to_string()],
    });
    assert_eq!(d.url, "/playlists/pl1/followers/contains");
    assert_eq!(d.params[0].1.to_query_value(), "u1,u2");
}

#[test]
fn test_create_playlist_encodes_the_user_id_and_skips_unset_fields() {
    let d = descriptor(Endpoint::CreatePlaylist {
        user_id: "user name".to_string(),
        details: PlaylistDetails {
            public: Some(false),
            ..PlaylistDetails::new("My Playlist")
        },
    });
    assert_eq!(d.method, Method::Post);
    assert_eq!(d.url, "/users/user%20name/playlists");
    assert_eq!(
        json_body(&d),
        json!({ "name": "My Playlist", "public": false })
    );
}

#[test]
fn test_reorder_includes_optional_fields_only_when_set() {
    let d = descriptor(Endpoint::ReorderPlaylistItems {
        id: "pl1".to_string(),
        range_start: 3,
        insert_before: 0,
        range_length: None,
        snapshot_id: None,
    });
    assert_eq!(d.method, Method::Put);
    assert_eq!(d.url, "/playlists/pl1/tracks");
    assert_eq!(json_body(&d), json!({ "range_start": 3, "insert_before": 0 }));

    let d = descriptor(Endpoint::ReorderPlaylistItems {
        id: "pl1".to_string(),
        range_start: 3,
        insert_before: 0,
        range_length: Some(2),
        snapshot_id: Some("snap".to_string()),
    });
    assert_eq!(
        json_body(&d),
        json!({
            "range_start": 3,
            "insert_before": 0,
            "range_length": 2,
            "snapshot_id": "snap",
        })
    );
}

#[test]
fn test_remove_items_wraps_uris_and_carries_the_snapshot_id() {
    let d = descriptor(Endpoint::RemoveItemsFromPlaylist {
        id: "pl1".to_string(),
        uris: vec!["spotify:track:a".to_string(), "spotify:track:b".to_string()],
        snapshot_id: Some("snap".to_string()),
    });
    assert_eq!(d.method, Method::Delete);
    assert_eq!(
        json_body(&d),
        json!({
            "tracks": [
                { "uri": "spotify:track:a" },
                { "uri": "spotify:track:b" },
            ],
            "snapshot_id": "snap",
        })
    );

    let d = descriptor(Endpoint::RemoveItemsAtPositions {
        id: "pl1".to_string(),
        positions: vec![0, 4],
        snapshot_id: "snap".to_string(),
    });
    assert_eq!(
        json_body(&d),
        json!({ "positions": [0, 4], "snapshot_id": "snap" })
    );
}

#[test]
fn test_cover_upload_sends_raw_jpeg_data() {
    let d = descriptor(Endpoint::UploadPlaylistCoverImage {
        id: "pl1".to_string(),
        jpeg_base64: "base64data".to_string(),
    });
    assert_eq!(d.method, Method::Put);
    assert_eq!(d.url, "/playlists/pl1/images");
    match &d.body {
        Some(RequestBody::Raw { content_type, data }) => {
            assert_eq!(content_type, "image/jpeg");
            assert_eq!(data, "base64data");
        }
        other => panic!("expected a raw body, got {other:?}"),
    }
}

#[test]
fn test_player_endpoints_scope_to_an_optional_device() {
    let d = descriptor(Endpoint::Pause { device_id: None });
    assert_eq!(d.method, Method::Put);
    assert_eq!(d.url, "/me/player/pause");
    assert!(d.params.is_empty());

    let d = descriptor(Endpoint::Seek {
        position_ms: 61_000,
        device_id: Some("dev1".to_string()),
    });
    assert_eq!(d.url, "/me/player/seek");
    assert_eq!(d.params[0], ("position_ms".to_string(), ParamValue::Int(61_000)));
    assert_eq!(d.params[1], ("device_id".to_string(), ParamValue::Str("dev1".to_string())));

    let d = descriptor(Endpoint::SetRepeat {
        state: RepeatState::Context,
        device_id: None,
    });
    assert_eq!(d.params, vec![("state".to_string(), ParamValue::Str("context".to_string()))]);

    let d = descriptor(Endpoint::Queue {
        uri: "spotify:track:abc".to_string(),
        device_id: Some("dev1".to_string()),
    });
    assert_eq!(d.method, Method::Post);
    assert_eq!(d.params[0].0, "uri");
    assert_eq!(d.params[1].0, "device_id");
}

#[test]
fn test_play_moves_the_device_to_the_query_and_the_rest_to_the_body() {
    let d = descriptor(Endpoint::Play {
        options: PlayOptions {
            device_id: Some("dev1".to_string()),
            context_uri: Some("spotify:album:xyz".to_string()),
            position_ms: Some(500),
            ..Default::default()
        },
    });
    assert_eq!(d.method, Method::Put);
    assert_eq!(d.url, "/me/player/play");
    assert_eq!(d.params, vec![("device_id".to_string(), ParamValue::Str("dev1".to_string()))]);
    assert_eq!(
        json_body(&d),
        json!({ "context_uri": "spotify:album:xyz", "position_ms": 500 })
    );
}

#[test]
fn test_transfer_playback_wraps_the_device_id() {
    let d = descriptor(Endpoint::TransferPlayback {
        device_id: "dev1".to_string(),
    });
    assert_eq!(d.method, Method::Put);
    assert_eq!(d.url, "/me/player");
    assert_eq!(json_body(&d), json!({ "device_ids": ["dev1"] }));
}

#[test]
fn test_clear_playlist_is_a_bodyless_put() {
    let d = descriptor(Endpoint::ClearPlaylist {
        id: "pl1".to_string(),
    });
    assert_eq!(d.method, Method::Put);
    assert_eq!(d.url, "/playlists/pl1/tracks");
    assert!(d.body.is_none());
}

use spotify_web::error::Error;
use spotify_web::types::Resource;
use spotify_web::utils::*;

#[test]
fn test_is_spotify_id_accepts_valid_ids() {
    assert!(is_spotify_id("4rzfv0JLZfVhOhbSQ8o5jZ"));
    assert!(is_spotify_id("0000000000000000000000"));
    assert!(is_spotify_id("abcdefghijKLMNOPQRST_-"));
}

#[test]
fn test_is_spotify_id_rejects_wrong_length() {
    // 23 characters
    assert!(!is_spotify_id("4rzfv0JLZfVhOhbSQ8o5jZz"));
    // 21 characters
    assert!(!is_spotify_id("4rzfv0JLZfVhOhbSQ8o5j"));
    assert!(!is_spotify_id(""));
}

#[test]
fn test_is_spotify_id_rejects_out_of_alphabet() {
    assert!(!is_spotify_id("4rzfv0JLZfVhOhbSQ8o5j!"));
    assert!(!is_spotify_id("4rzfv0JLZfVhOhbSQ8o5j "));
    assert!(!is_spotify_id("4rzfv0JLZfVhOhbSQ8o5jé"));
}

#[test]
fn test_add_trailing_slash() {
    assert_eq!(
        add_trailing_slash("https://api.example.com/v1"),
        "https://api.example.com/v1/"
    );
}

#[test]
fn test_add_trailing_slash_is_idempotent() {
    let once = add_trailing_slash("https://api.example.com/v1");
    assert_eq!(add_trailing_slash(&once), once);
}

#[test]
fn test_create_uri() {
    let uri = create_uri(Resource::Track, "4rzfv0JLZfVhOhbSQ8o5jZ").unwrap();
    assert_eq!(uri, "spotify:track:4rzfv0JLZfVhOhbSQ8o5jZ");
}

#[test]
fn test_create_uri_rejects_invalid_id() {
    let err = create_uri(Resource::Track, "short").unwrap_err();
    assert!(matches!(err, Error::InvalidId(id) if id == "short"));
}

#[test]
fn test_uri_round_trip_for_all_resource_types() {
    let id = "4rzfv0JLZfVhOhbSQ8o5jZ";
    for resource in Resource::ALL {
        let uri = create_uri(resource, id).unwrap();
        let (parsed_resource, parsed_id) = parse_uri(&uri).unwrap();
        assert_eq!(parsed_resource, resource);
        assert_eq!(parsed_id, id);
    }
}

#[test]
fn test_create_uris_preserves_order() {
    let ids = ["4rzfv0JLZfVhOhbSQ8o5jZ", "1301WleyT98MSxVHPZCA6M"];
    let uris = create_uris(Resource::Album, &ids).unwrap();
    assert_eq!(
        uris,
        vec![
            "spotify:album:4rzfv0JLZfVhOhbSQ8o5jZ",
            "spotify:album:1301WleyT98MSxVHPZCA6M",
        ]
    );
}

#[test]
fn test_create_uris_fails_on_first_invalid_id() {
    let ids = ["4rzfv0JLZfVhOhbSQ8o5jZ", "bogus", "1301WleyT98MSxVHPZCA6M"];
    let err = create_uris(Resource::Track, &ids).unwrap_err();
    assert!(matches!(err, Error::InvalidId(id) if id == "bogus"));
}

#[test]
fn test_parse_uri_rejects_malformed_input() {
    assert!(parse_uri("spotify:track").is_err());
    assert!(parse_uri("spotify:nonsense:4rzfv0JLZfVhOhbSQ8o5jZ").is_err());
    assert!(parse_uri("deezer:track:4rzfv0JLZfVhOhbSQ8o5jZ").is_err());
    assert!(parse_uri("spotify:track:short").is_err());
}

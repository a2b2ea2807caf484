//! Integration tests for the `Spotify` client.
//!
//! These tests verify that each operation reaches the right endpoint with the
//! right parameters and that results are unwrapped as documented.

use std::sync::Arc;

use serde_json::json;
use spotify_api::endpoints::{
    ArtistAlbumsParams, AlbumType, FeaturedPlaylistsParams, PageParams, PlaylistDetails,
    RecommendationsParams, SearchParams, TimeRange, TopItemsParams, TrackPositions, Tuneable,
    TuneableAttributes,
};
use spotify_api::{
    AccessToken, BaseUrl, ClientCredentials, ClientId, ClientSecret, HttpError,
    InvalidArgumentError, Spotify, SpotifyConfig,
};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client with a fixed token that talks to the mock server.
fn create_spotify(server: &MockServer) -> Spotify {
    let config = SpotifyConfig::builder()
        .access_token(AccessToken::new("test-token").unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    Spotify::new(config).unwrap()
}

async fn mount_ok(server: &MockServer, verb: &str, route: &str, body: serde_json::Value) {
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

// === Catalog ===

#[tokio::test]
async fn test_track_accepts_uri_and_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tracks/4uLU6hMCjMI75M1A2tKUQC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "Never"})))
        .expect(2)
        .mount(&server)
        .await;

    let spotify = create_spotify(&server);
    let by_uri = spotify
        .track("spotify:track:4uLU6hMCjMI75M1A2tKUQC")
        .await
        .unwrap();
    let by_url = spotify
        .track("https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC?si=x")
        .await
        .unwrap();

    assert_eq!(by_uri["name"], "Never");
    assert_eq!(by_uri, by_url);
}

#[tokio::test]
async fn test_tracks_joins_normalized_ids() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tracks"))
        .and(query_param("ids", "a,b,c"))
        .and(query_param("market", "SE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tracks": []})))
        .expect(1)
        .mount(&server)
        .await;

    let spotify = create_spotify(&server);
    spotify
        .tracks(&["spotify:track:a", "b", "https://open.spotify.com/track/c"], Some("SE"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_artist_top_tracks_defaults_to_us() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/artists/a1/top-tracks"))
        .and(query_param("country", "US"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tracks": []})))
        .expect(1)
        .mount(&server)
        .await;

    let spotify = create_spotify(&server);
    spotify.artist_top_tracks("a1", None).await.unwrap();
}

#[tokio::test]
async fn test_artist_albums_joins_album_types() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/artists/a1/albums"))
        .and(query_param("album_type", "album,single"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(1)
        .mount(&server)
        .await;

    let spotify = create_spotify(&server);
    let params = ArtistAlbumsParams {
        album_type: vec![AlbumType::Album, AlbumType::Single],
        limit: Some(10),
        ..ArtistAlbumsParams::default()
    };
    spotify.artist_albums("spotify:artist:a1", &params).await.unwrap();
}

#[tokio::test]
async fn test_album_tracks_sends_paging() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/albums/al1/tracks"))
        .and(query_param("limit", "50"))
        .and(query_param("offset", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(1)
        .mount(&server)
        .await;

    let spotify = create_spotify(&server);
    spotify
        .album_tracks("al1", PageParams::new(50, 100))
        .await
        .unwrap();
}

// === Search ===

#[tokio::test]
async fn test_search_playlist_sends_playlist_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "road trip"))
        .and(query_param("type", "playlist"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"playlists": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let spotify = create_spotify(&server);
    spotify
        .search_playlist("road trip", &SearchParams::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_search_artist_and_paging_through_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("type", "artist"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "artists": {
                "items": [{"id": "x"}],
                "next": format!("{}/search?q=abba&type=artist&offset=1&limit=1", server.uri())
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("offset", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "artists": {"items": [{"id": "y"}], "next": null}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let spotify = create_spotify(&server);
    let params = SearchParams {
        limit: Some(1),
        ..SearchParams::default()
    };
    let first = spotify.search_artist("abba", &params).await.unwrap();

    let second = spotify.next(&first["artists"]).await.unwrap().unwrap();
    assert_eq!(second["artists"]["items"][0]["id"], "y");
    assert_eq!(spotify.next(&second["artists"]).await.unwrap(), None);
}

// === Users and playlists ===

#[tokio::test]
async fn test_user_encodes_path_segment() {
    let server = MockServer::start().await;
    mount_ok(&server, "GET", "/users/jane%20doe", json!({"id": "jane doe"})).await;

    let spotify = create_spotify(&server);
    let user = spotify.user("jane doe").await.unwrap();
    assert_eq!(user["id"], "jane doe");
}

#[tokio::test]
async fn test_starred_playlist_when_no_id() {
    let server = MockServer::start().await;
    mount_ok(&server, "GET", "/users/jane/starred", json!({"name": "Starred"})).await;

    let spotify = create_spotify(&server);
    spotify.user_playlist("jane", None, None).await.unwrap();
}

#[tokio::test]
async fn test_create_playlist_posts_name_and_visibility() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/jane/playlists"))
        .and(body_json(json!({"name": "Mix", "public": false})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "p1"})))
        .expect(1)
        .mount(&server)
        .await;

    let spotify = create_spotify(&server);
    let playlist = spotify
        .user_playlist_create("jane", "Mix", false)
        .await
        .unwrap();
    assert_eq!(playlist["id"], "p1");
}

#[tokio::test]
async fn test_change_details_sends_only_set_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/users/jane/playlists/p1"))
        .and(body_json(json!({"name": "Renamed"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let spotify = create_spotify(&server);
    let details = PlaylistDetails {
        name: Some("Renamed".to_string()),
        ..PlaylistDetails::default()
    };
    let value = spotify
        .user_playlist_change_details("jane", "spotify:playlist:p1", &details)
        .await
        .unwrap();
    assert_eq!(value, json!({}));
}

#[tokio::test]
async fn test_add_tracks_sends_uris_and_position() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/jane/playlists/p1/tracks"))
        .and(query_param("position", "0"))
        .and(body_json(json!(["spotify:track:a", "spotify:track:b"])))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"snapshot_id": "s2"})))
        .expect(1)
        .mount(&server)
        .await;

    let spotify = create_spotify(&server);
    let value = spotify
        .user_playlist_add_tracks("jane", "p1", &["a", "spotify:track:b"], Some(0))
        .await
        .unwrap();
    assert_eq!(value["snapshot_id"], "s2");
}

#[tokio::test]
async fn test_reorder_tracks_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/users/jane/playlists/p1/tracks"))
        .and(body_json(json!({
            "range_start": 5,
            "insert_before": 0,
            "range_length": 2,
            "snapshot_id": "s1"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"snapshot_id": "s2"})))
        .expect(1)
        .mount(&server)
        .await;

    let spotify = create_spotify(&server);
    spotify
        .user_playlist_reorder_tracks("jane", "p1", 5, 0, 2, Some("s1"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_remove_specific_occurrences_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/users/jane/playlists/p1/tracks"))
        .and(body_json(json!({
            "tracks": [{"uri": "spotify:track:a", "positions": [0, 3]}],
            "snapshot_id": "s1"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"snapshot_id": "s2"})))
        .expect(1)
        .mount(&server)
        .await;

    let spotify = create_spotify(&server);
    spotify
        .user_playlist_remove_specific_occurrences_of_tracks(
            "jane",
            "p1",
            vec![TrackPositions::new("a", vec![0, 3])],
            Some("s1"),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_remove_all_occurrences_by_mode_name() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/users/jane/playlists/p1/tracks"))
        .and(body_json(json!({"tracks": [{"uri": "spotify:track:a"}]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"snapshot_id": "s2"})))
        .expect(1)
        .mount(&server)
        .await;

    let spotify = create_spotify(&server);
    spotify
        .user_playlist_remove_tracks_by_mode(
            "jane",
            "p1",
            "all",
            vec![TrackPositions::new("a", Vec::new())],
            None,
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_unknown_removal_mode_sends_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let spotify = create_spotify(&server);
    let result = spotify
        .user_playlist_remove_tracks_by_mode(
            "jane",
            "p1",
            "bogus",
            vec![TrackPositions::new("a", vec![1])],
            None,
        )
        .await;

    match result {
        Err(HttpError::InvalidArgument(InvalidArgumentError::UnknownRemovalMode { mode })) => {
            assert_eq!(mode, "bogus");
        }
        other => panic!("Expected UnknownRemovalMode, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_is_following_joins_user_ids() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/owner/playlists/p1/followers/contains"))
        .and(query_param("ids", "u1,u2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([true, false])))
        .expect(1)
        .mount(&server)
        .await;

    let spotify = create_spotify(&server);
    let value = spotify
        .user_playlist_is_following("owner", "p1", &["u1", "u2"])
        .await
        .unwrap();
    assert_eq!(value, json!([true, false]));
}

// === Browse and recommendations ===

#[tokio::test]
async fn test_featured_playlists_formats_timestamp() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/browse/featured-playlists"))
        .and(query_param("timestamp", "2014-10-23T09:00:00Z"))
        .and(query_param("locale", "sv_SE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Hej"})))
        .expect(1)
        .mount(&server)
        .await;

    let spotify = create_spotify(&server);
    let timestamp = "2014-10-23T09:00:00Z".parse().unwrap();
    let params = FeaturedPlaylistsParams {
        locale: Some("sv_SE".to_string()),
        timestamp: Some(timestamp),
        ..FeaturedPlaylistsParams::default()
    };
    let value = spotify.featured_playlists(&params).await.unwrap();
    assert_eq!(value["message"], "Hej");
}

#[tokio::test]
async fn test_recommendations_sends_seeds_and_attributes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recommendations"))
        .and(query_param("seed_genres", "jazz,soul"))
        .and(query_param("target_energy", "0.8"))
        .and(query_param("min_tempo", "100"))
        .and(query_param("max_tempo", "130"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tracks": []})))
        .expect(1)
        .mount(&server)
        .await;

    let spotify = create_spotify(&server);
    let params = RecommendationsParams {
        seed_genres: vec!["jazz".to_string(), "soul".to_string()],
        attributes: TuneableAttributes {
            energy: Tuneable::target(0.8),
            tempo: Tuneable::between(100.0, 130.0),
            ..TuneableAttributes::default()
        },
        ..RecommendationsParams::default()
    };
    spotify.recommendations(&params).await.unwrap();
}

// === Audio ===

#[tokio::test]
async fn test_audio_features_extracts_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/audio-features"))
        .and(query_param("ids", "a,b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "audio_features": [{"id": "a"}, {"id": "b"}],
            "extra": "ignored"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let spotify = create_spotify(&server);
    let features = spotify
        .audio_features(&["spotify:track:a", "b"])
        .await
        .unwrap();
    assert_eq!(features, json!([{"id": "a"}, {"id": "b"}]));
}

#[tokio::test]
async fn test_audio_features_missing_field_is_empty_array() {
    let server = MockServer::start().await;
    mount_ok(&server, "GET", "/audio-features", json!({"unexpected": true})).await;

    let spotify = create_spotify(&server);
    let features = spotify.audio_features(&["a"]).await.unwrap();
    assert_eq!(features, json!([]));
}

#[tokio::test]
async fn test_audio_feature_single_track() {
    let server = MockServer::start().await;
    mount_ok(&server, "GET", "/audio-features/a", json!({"id": "a", "tempo": 120.0})).await;

    let spotify = create_spotify(&server);
    let feature = spotify.audio_feature("spotify:track:a").await.unwrap();
    assert_eq!(feature["tempo"], 120.0);
}

// === Current user ===

#[tokio::test]
async fn test_me_shares_client_and_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/me"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "jane"})))
        .expect(2)
        .mount(&server)
        .await;

    let spotify = create_spotify(&server);
    let via_me = spotify.me().user().await.unwrap();
    let via_root = spotify.current_user().await.unwrap();
    assert_eq!(via_me, via_root);
}

#[tokio::test]
async fn test_me_top_tracks_sends_time_range() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/me/top/tracks"))
        .and(query_param("time_range", "short_term"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(1)
        .mount(&server)
        .await;

    let spotify = create_spotify(&server);
    let params = TopItemsParams {
        time_range: TimeRange::ShortTerm,
        ..TopItemsParams::default()
    };
    spotify.me().top_tracks(params).await.unwrap();
}

#[tokio::test]
async fn test_me_followed_artists_sends_type_and_cursor() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/me/following"))
        .and(query_param("type", "artist"))
        .and(query_param("after", "a9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"artists": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let spotify = create_spotify(&server);
    spotify
        .me()
        .followed_artists(Some(20), Some("a9"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_me_contains_tracks() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/me/tracks/contains"))
        .and(query_param("ids", "a,b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([true, false])))
        .expect(1)
        .mount(&server)
        .await;

    let spotify = create_spotify(&server);
    let value = spotify.me().contains_tracks(&["a", "b"]).await.unwrap();
    assert_eq!(value, json!([true, false]));
}

// === Client credentials ===

#[tokio::test]
async fn test_client_credentials_token_authorizes_calls() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "cc-token",
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/recommendations/available-genre-seeds"))
        .and(header("Authorization", "Bearer cc-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"genres": ["jazz"]})))
        .expect(2)
        .mount(&server)
        .await;

    let credentials = ClientCredentials::new(
        ClientId::new("id").unwrap(),
        ClientSecret::new("secret").unwrap(),
    )
    .with_token_url(format!("{}/api/token", server.uri()));

    let config = SpotifyConfig::builder()
        .token_source(Arc::new(credentials))
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    let spotify = Spotify::new(config).unwrap();

    for _ in 0..2 {
        let seeds = spotify.recommendation_genre_seeds().await.unwrap();
        assert_eq!(seeds["genres"][0], "jazz");
    }
}

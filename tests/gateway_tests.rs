//! HTTP-level tests for the catalog gateway.
//!
//! These tests use a mock server to verify client behavior, including the
//! transport/application error split, without a real backend.

use std::time::Duration;

use tunedex::api::{ApiError, CatalogClient, CatalogGateway};
use tunedex::domain::RatingDraft;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> CatalogClient {
    CatalogClient::new(&server.uri(), Duration::from_secs(2)).expect("valid mock server url")
}

// =============================================================================
// Login
// =============================================================================

mod login {
    use super::*;

    #[tokio::test]
    async fn success_returns_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .and(body_json(serde_json::json!({ "username": "alice" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "user_id": 7,
                "username": "alice"
            })))
            .mount(&server)
            .await;

        let session = client_for(&server).login("alice").await.expect("login");
        assert_eq!(session.user_id, 7);
        assert_eq!(session.username, "alice");
    }

    #[tokio::test]
    async fn unknown_user_is_rejected_with_backend_reason() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(serde_json::json!({ "error": "User not found" })),
            )
            .mount(&server)
            .await;

        let result = client_for(&server).login("nobody").await;
        match result.unwrap_err() {
            ApiError::Rejected(message) => assert_eq!(message, "User not found"),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn two_xx_without_user_id_is_an_application_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let result = client_for(&server).login("ghost").await;
        assert!(matches!(result.unwrap_err(), ApiError::Rejected(_)));
    }

    #[tokio::test]
    async fn connection_failure_is_reported_as_unreachable() {
        // Port 1 has nothing listening on it.
        let client =
            CatalogClient::new("http://127.0.0.1:1", Duration::from_secs(2)).expect("valid url");

        let result = client.login("alice").await;
        assert!(matches!(result.unwrap_err(), ApiError::Unreachable(_)));
    }
}

// =============================================================================
// Song search
// =============================================================================

mod search {
    use super::*;

    #[tokio::test]
    async fn query_is_url_encoded_and_results_parse() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/songs"))
            .and(query_param("q", "rock & roll"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "song_id": 1, "title": "Rock & Roll", "artist_name": "Led Zeppelin", "release_year": 1971 }
            ])))
            .mount(&server)
            .await;

        let songs = client_for(&server)
            .search_songs("rock & roll")
            .await
            .expect("search");
        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].title, "Rock & Roll");
        assert_eq!(songs[0].artist_name.as_deref(), Some("Led Zeppelin"));
    }

    #[tokio::test]
    async fn empty_query_returns_whatever_the_backend_says() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/songs"))
            .and(query_param("q", ""))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let songs = client_for(&server).search_songs("").await.expect("search");
        assert!(songs.is_empty());
    }

    #[tokio::test]
    async fn no_matches_is_an_empty_vec_not_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/songs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let songs = client_for(&server)
            .search_songs("zzzzzz")
            .await
            .expect("search");
        assert!(songs.is_empty());
    }

    #[tokio::test]
    async fn songs_without_artist_or_year_parse() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/songs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "song_id": 2, "title": "Untitled" }
            ])))
            .mount(&server)
            .await;

        let songs = client_for(&server).search_songs("x").await.expect("search");
        assert_eq!(songs[0].artist_label(), "Unknown");
        assert_eq!(songs[0].year_label(), "N/A");
    }
}

// =============================================================================
// Ratings
// =============================================================================

mod ratings {
    use super::*;

    #[tokio::test]
    async fn stars_travel_as_an_integer() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/ratings"))
            .and(body_json(serde_json::json!({
                "user_id": 7,
                "song_id": 3,
                "stars": 4,
                "comment": "great chorus"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "success": true
            })))
            .mount(&server)
            .await;

        let rating = RatingDraft {
            user_id: 7,
            song_id: 3,
            stars: 4,
            comment: "great chorus".to_string(),
        };
        client_for(&server)
            .submit_rating(&rating)
            .await
            .expect("rating should be accepted");
    }

    #[tokio::test]
    async fn out_of_range_rejection_carries_backend_reason() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/ratings"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": "Stars must be between 1 and 5"
            })))
            .mount(&server)
            .await;

        let rating = RatingDraft {
            user_id: 7,
            song_id: 3,
            stars: 9,
            comment: String::new(),
        };
        let result = client_for(&server).submit_rating(&rating).await;
        match result.unwrap_err() {
            ApiError::Rejected(message) => assert_eq!(message, "Stars must be between 1 and 5"),
            other => panic!("expected rejection, got {other:?}"),
        }
    }
}

// =============================================================================
// Playlists
// =============================================================================

mod playlists {
    use super::*;

    #[tokio::test]
    async fn create_returns_the_stored_record() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/playlists"))
            .and(body_json(serde_json::json!({
                "owner_id": 7,
                "name": "Road trip",
                "is_public": true
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "playlist_id": 12,
                "owner_id": 7,
                "name": "Road trip",
                "is_public": true
            })))
            .mount(&server)
            .await;

        let playlist = client_for(&server)
            .create_playlist(7, "Road trip", true)
            .await
            .expect("create");
        assert_eq!(playlist.playlist_id, 12);
        assert_eq!(playlist.name, "Road trip");
    }

    #[tokio::test]
    async fn listing_parses_multiple_records() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/playlists"))
            .and(query_param("user_id", "7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "playlist_id": 1, "owner_id": 7, "name": "A", "is_public": true },
                { "playlist_id": 2, "owner_id": 7, "name": "B", "is_public": false }
            ])))
            .mount(&server)
            .await;

        let playlists = client_for(&server).list_playlists(7).await.expect("list");
        assert_eq!(playlists.len(), 2);
        assert!(!playlists[1].is_public);
    }

    #[tokio::test]
    async fn rename_of_missing_playlist_surfaces_reason() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/playlists/99"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(serde_json::json!({ "error": "Playlist not found" })),
            )
            .mount(&server)
            .await;

        let result = client_for(&server).rename_playlist(99, "New name").await;
        match result.unwrap_err() {
            ApiError::Rejected(message) => assert_eq!(message, "Playlist not found"),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn delete_of_missing_playlist_is_ok() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/playlists/99"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(serde_json::json!({ "error": "Playlist not found" })),
            )
            .mount(&server)
            .await;

        client_for(&server)
            .delete_playlist(99)
            .await
            .expect("repeated delete should converge");
    }
}

// =============================================================================
// Playlist membership
// =============================================================================

mod membership {
    use super::*;

    #[tokio::test]
    async fn duplicate_add_surfaces_backend_reason_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/playlists/1/songs"))
            .and(body_json(serde_json::json!({ "song_id": 3 })))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": "Song already in playlist or invalid playlist/song"
            })))
            .mount(&server)
            .await;

        let result = client_for(&server).add_song_to_playlist(1, 3).await;
        match result.unwrap_err() {
            ApiError::Rejected(message) => {
                assert_eq!(message, "Song already in playlist or invalid playlist/song");
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn remove_of_missing_membership_is_ok() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/playlists/1/songs/3"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(serde_json::json!({ "error": "Song not found in playlist" })),
            )
            .mount(&server)
            .await;

        client_for(&server)
            .remove_song_from_playlist(1, 3)
            .await
            .expect("repeated remove should converge");
    }

    #[tokio::test]
    async fn membership_listing_parses_positions() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/playlists/1/songs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "song_id": 3, "title": "Holiday", "artist_name": "Green Day",
                  "release_year": 2004, "position": 1 },
                { "song_id": 4, "title": "Untitled", "position": 2 }
            ])))
            .mount(&server)
            .await;

        let songs = client_for(&server)
            .list_playlist_songs(1)
            .await
            .expect("listing");
        assert_eq!(songs.len(), 2);
        assert_eq!(songs[0].position, Some(1));
        assert_eq!(songs[1].artist_label(), "Unknown");
    }
}

// =============================================================================
// Error taxonomy
// =============================================================================

mod errors {
    use super::*;

    #[tokio::test]
    async fn non_json_failure_body_becomes_a_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/songs"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let result = client_for(&server).search_songs("x").await;
        match result.unwrap_err() {
            ApiError::Server { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("expected server error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn rejection_is_distinguishable_from_transport_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/playlists/1/songs"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(serde_json::json!({ "error": "nope" })),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let rejection = client.add_song_to_playlist(1, 3).await.unwrap_err();
        assert!(rejection.is_rejection());

        let unreachable = CatalogClient::new("http://127.0.0.1:1", Duration::from_secs(2))
            .expect("valid url")
            .add_song_to_playlist(1, 3)
            .await
            .unwrap_err();
        assert!(!unreachable.is_rejection());
    }
}

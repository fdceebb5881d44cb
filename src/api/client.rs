//! HTTP implementation of the catalog gateway.

use crate::api::error::{ApiError, Result};
use crate::api::gateway::CatalogGateway;
use crate::api::types::{
    AddSongRequest, CreatePlaylistRequest, ErrorReply, LoginReply, LoginRequest,
    RenamePlaylistRequest,
};
use crate::domain::{Playlist, PlaylistSong, RatingDraft, Session, Song};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Maximum time spent establishing a connection.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP client for the catalog backend.
///
/// Holds one pooled `reqwest` client with explicit connect and request
/// timeouts, so no call can hang indefinitely. All endpoint methods live in
/// the [`CatalogGateway`] impl.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use tunedex::api::{CatalogClient, CatalogGateway};
///
/// # async fn run() -> tunedex::api::Result<()> {
/// let client = CatalogClient::new("http://localhost:5001", Duration::from_secs(10))?;
/// let songs = client.search_songs("harvest").await?;
/// println!("{} matches", songs.len());
/// # Ok(())
/// # }
/// ```
pub struct CatalogClient {
    http: Client,
    base_url: String,
}

impl CatalogClient {
    /// Creates a client for the given server URL.
    ///
    /// The URL is validated and normalized (trailing slash removed). The
    /// request timeout applies to every call made through this client.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] if the URL is empty or does not use
    /// an http/https scheme, and [`ApiError::Transport`] if the underlying
    /// HTTP client cannot be constructed.
    pub fn new(base_url: &str, request_timeout: Duration) -> Result<Self> {
        if base_url.is_empty() {
            return Err(ApiError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ApiError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(request_timeout)
            .connect_timeout(CONNECT_TIMEOUT)
            .user_agent(format!("tunedex/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::Transport)?;

        Ok(Self { http, base_url })
    }

    /// Returns the normalized server URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Classifies a send-level failure.
    ///
    /// Connection and timeout failures become [`ApiError::Unreachable`] so the
    /// UI can show a connectivity message distinct from protocol errors.
    fn map_send_error(error: reqwest::Error) -> ApiError {
        if error.is_connect() || error.is_timeout() {
            ApiError::Unreachable(error.to_string())
        } else {
            ApiError::Transport(error)
        }
    }

    /// Turns a failure response into an [`ApiError`].
    ///
    /// A body of the shape `{"error": "..."}` becomes a [`ApiError::Rejected`]
    /// carrying the backend's reason unchanged; anything else becomes a
    /// [`ApiError::Server`] with the raw status and body text.
    async fn failure(response: Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        match serde_json::from_str::<ErrorReply>(&body) {
            Ok(ErrorReply {
                error: Some(message),
            }) => ApiError::Rejected(message),
            _ => ApiError::Server {
                status,
                message: body,
            },
        }
    }
}

#[async_trait]
impl CatalogGateway for CatalogClient {
    async fn login(&self, username: &str) -> Result<Session> {
        let url = format!("{}/api/login", self.base_url);
        debug!(url = %url, username = %username, "attempting login");

        let request = LoginRequest {
            username: username.to_string(),
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        if response.status().is_success() {
            let reply: LoginReply = response
                .json()
                .await
                .map_err(|e| ApiError::Parse(format!("login reply: {e}")))?;

            match reply.user_id {
                Some(user_id) => {
                    let username = reply.username.unwrap_or_else(|| username.to_string());
                    info!(user_id = user_id, username = %username, "login successful");
                    Ok(Session { user_id, username })
                }
                None => {
                    warn!(username = %username, "login reply carried no user id");
                    Err(ApiError::Rejected(
                        reply.error.unwrap_or_else(|| "User not found".to_string()),
                    ))
                }
            }
        } else {
            Err(Self::failure(response).await)
        }
    }

    async fn search_songs(&self, query: &str) -> Result<Vec<Song>> {
        let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
        let url = format!("{}/api/songs?q={}", self.base_url, encoded);
        debug!(url = %url, query = %query, "searching songs");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        if response.status().is_success() {
            let songs: Vec<Song> = response
                .json()
                .await
                .map_err(|e| ApiError::Parse(format!("song listing: {e}")))?;
            debug!(results = songs.len(), "search complete");
            Ok(songs)
        } else {
            Err(Self::failure(response).await)
        }
    }

    async fn submit_rating(&self, rating: &RatingDraft) -> Result<()> {
        let url = format!("{}/api/ratings", self.base_url);
        debug!(
            url = %url,
            song_id = rating.song_id,
            stars = rating.stars,
            "submitting rating"
        );

        let response = self
            .http
            .post(&url)
            .json(rating)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::failure(response).await)
        }
    }

    async fn list_playlists(&self, user_id: i64) -> Result<Vec<Playlist>> {
        let url = format!("{}/api/playlists?user_id={}", self.base_url, user_id);
        debug!(url = %url, "listing playlists");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::Parse(format!("playlist listing: {e}")))
        } else {
            Err(Self::failure(response).await)
        }
    }

    async fn create_playlist(
        &self,
        owner_id: i64,
        name: &str,
        is_public: bool,
    ) -> Result<Playlist> {
        let url = format!("{}/api/playlists", self.base_url);
        debug!(url = %url, name = %name, is_public = is_public, "creating playlist");

        let request = CreatePlaylistRequest {
            owner_id,
            name: name.to_string(),
            is_public,
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::Parse(format!("created playlist: {e}")))
        } else {
            Err(Self::failure(response).await)
        }
    }

    async fn rename_playlist(&self, playlist_id: i64, new_name: &str) -> Result<()> {
        let url = format!("{}/api/playlists/{}", self.base_url, playlist_id);
        debug!(url = %url, new_name = %new_name, "renaming playlist");

        let request = RenamePlaylistRequest {
            name: new_name.to_string(),
        };

        let response = self
            .http
            .put(&url)
            .json(&request)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::failure(response).await)
        }
    }

    async fn delete_playlist(&self, playlist_id: i64) -> Result<()> {
        let url = format!("{}/api/playlists/{}", self.base_url, playlist_id);
        debug!(url = %url, "deleting playlist");

        let response = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        let status = response.status();
        if status.is_success() || status == StatusCode::NOT_FOUND {
            // 404 means the playlist is already gone; delete is idempotent.
            debug!(playlist_id = playlist_id, "playlist deleted");
            Ok(())
        } else {
            Err(Self::failure(response).await)
        }
    }

    async fn list_playlist_songs(&self, playlist_id: i64) -> Result<Vec<PlaylistSong>> {
        let url = format!("{}/api/playlists/{}/songs", self.base_url, playlist_id);
        debug!(url = %url, "listing playlist songs");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::Parse(format!("playlist songs: {e}")))
        } else {
            Err(Self::failure(response).await)
        }
    }

    async fn add_song_to_playlist(&self, playlist_id: i64, song_id: i64) -> Result<()> {
        let url = format!("{}/api/playlists/{}/songs", self.base_url, playlist_id);
        debug!(url = %url, song_id = song_id, "adding song to playlist");

        let request = AddSongRequest { song_id };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::failure(response).await)
        }
    }

    async fn remove_song_from_playlist(&self, playlist_id: i64, song_id: i64) -> Result<()> {
        let url = format!(
            "{}/api/playlists/{}/songs/{}",
            self.base_url, playlist_id, song_id
        );
        debug!(url = %url, "removing song from playlist");

        let response = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        let status = response.status();
        if status.is_success() || status == StatusCode::NOT_FOUND {
            // 404 means the membership is already gone; remove is idempotent.
            Ok(())
        } else {
            Err(Self::failure(response).await)
        }
    }
}

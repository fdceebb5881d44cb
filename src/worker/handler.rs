//! Worker implementation for asynchronous catalog operations.
//!
//! The worker owns the gateway and processes requests one at a time, keeping
//! network I/O out of the UI loop. Failures are converted into user-facing
//! [`ApiResponse::Failed`] messages here so the application layer never deals
//! with raw gateway errors.

use crate::api::{ApiError, CatalogGateway};
use crate::domain::PlaylistCard;
use crate::worker::messages::{ApiRequest, ApiResponse, RequestKind};
use tokio::sync::mpsc;
use tracing::debug;

/// Background task that executes catalog requests.
///
/// Constructed with any [`CatalogGateway`] implementation; production code
/// hands it a [`CatalogClient`](crate::api::CatalogClient), tests hand it an
/// in-memory fake.
pub struct ApiWorker {
    gateway: Box<dyn CatalogGateway>,
}

impl ApiWorker {
    /// Creates a worker backed by the given gateway.
    #[must_use]
    pub fn new(gateway: Box<dyn CatalogGateway>) -> Self {
        Self { gateway }
    }

    /// Processes a single request and returns the response to deliver.
    ///
    /// Requests within one call are issued strictly sequentially; the
    /// playlists load performs its listing before any membership fetch.
    #[tracing::instrument(level = "debug", skip_all, fields(request = ?request.kind()))]
    pub async fn handle_request(&self, request: ApiRequest) -> ApiResponse {
        let kind = request.kind();

        match request {
            ApiRequest::Login { username } => match self.gateway.login(&username).await {
                Ok(session) => ApiResponse::LoggedIn { session },
                Err(e) => Self::failed(kind, &e),
            },
            ApiRequest::SearchSongs { query } => match self.gateway.search_songs(&query).await {
                Ok(songs) => {
                    debug!(results = songs.len(), "search finished");
                    ApiResponse::SearchResults { songs }
                }
                Err(e) => Self::failed(kind, &e),
            },
            ApiRequest::SubmitRating { rating } => {
                match self.gateway.submit_rating(&rating).await {
                    Ok(()) => ApiResponse::RatingSaved,
                    Err(e) => Self::failed(kind, &e),
                }
            }
            ApiRequest::LoadPlaylists { user_id } => self.load_playlists(user_id).await,
            ApiRequest::CreatePlaylist {
                owner_id,
                name,
                is_public,
            } => {
                match self
                    .gateway
                    .create_playlist(owner_id, &name, is_public)
                    .await
                {
                    Ok(playlist) => {
                        debug!(playlist_id = playlist.playlist_id, "playlist created");
                        ApiResponse::PlaylistCreated
                    }
                    Err(e) => Self::failed(kind, &e),
                }
            }
            ApiRequest::RenamePlaylist {
                playlist_id,
                new_name,
            } => {
                match self
                    .gateway
                    .rename_playlist(playlist_id, &new_name)
                    .await
                {
                    Ok(()) => ApiResponse::PlaylistRenamed,
                    Err(e) => Self::failed(kind, &e),
                }
            }
            ApiRequest::DeletePlaylist { playlist_id } => {
                match self.gateway.delete_playlist(playlist_id).await {
                    Ok(()) => ApiResponse::PlaylistDeleted,
                    Err(e) => Self::failed(kind, &e),
                }
            }
            ApiRequest::AddSongToPlaylist {
                playlist_id,
                song_id,
            } => {
                match self
                    .gateway
                    .add_song_to_playlist(playlist_id, song_id)
                    .await
                {
                    Ok(()) => ApiResponse::SongAdded,
                    Err(e) => Self::failed(kind, &e),
                }
            }
            ApiRequest::RemoveSongFromPlaylist {
                playlist_id,
                song_id,
            } => {
                match self
                    .gateway
                    .remove_song_from_playlist(playlist_id, song_id)
                    .await
                {
                    Ok(()) => ApiResponse::SongRemoved,
                    Err(e) => Self::failed(kind, &e),
                }
            }
        }
    }

    /// Loads playlists and their member songs.
    ///
    /// Issues one membership listing per playlist, sequentially after the
    /// playlist listing itself. Callers only see the assembled cards, so a
    /// batched backend listing could replace this without changing them.
    async fn load_playlists(&self, user_id: i64) -> ApiResponse {
        let playlists = match self.gateway.list_playlists(user_id).await {
            Ok(playlists) => playlists,
            Err(e) => return Self::failed(RequestKind::LoadPlaylists, &e),
        };

        let mut cards = Vec::with_capacity(playlists.len());
        for playlist in playlists {
            match self.gateway.list_playlist_songs(playlist.playlist_id).await {
                Ok(songs) => cards.push(PlaylistCard { playlist, songs }),
                Err(e) => return Self::failed(RequestKind::LoadPlaylists, &e),
            }
        }

        debug!(card_count = cards.len(), "playlists loaded");
        ApiResponse::PlaylistsLoaded { cards }
    }

    /// Converts a gateway error into a failure response with a logged cause.
    fn failed(request: RequestKind, error: &ApiError) -> ApiResponse {
        debug!(request = ?request, error = %error, "catalog request failed");
        ApiResponse::Failed {
            request,
            message: error.to_string(),
        }
    }

    /// Runs the worker loop until the request channel closes.
    ///
    /// Receives requests, processes them in order, and delivers responses.
    /// Stops when either side of the channel pair is dropped.
    pub async fn run(
        self,
        mut requests: mpsc::Receiver<ApiRequest>,
        responses: mpsc::Sender<ApiResponse>,
    ) {
        while let Some(request) = requests.recv().await {
            let response = self.handle_request(request).await;
            if responses.send(response).await.is_err() {
                debug!("response channel closed, stopping worker");
                break;
            }
        }
    }
}

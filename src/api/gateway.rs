//! Gateway abstraction over the catalog backend.
//!
//! This module defines the [`CatalogGateway`] trait that the worker programs
//! against. The trait is minimal and mirrors the backend endpoints one method
//! per operation, not a generic data-access layer.
//!
//! # Design
//!
//! Keeping call sites behind this seam means the per-playlist membership
//! fetches performed by the worker could be replaced by a batched server-side
//! listing with a new implementation, without touching the application layer.
//! Tests substitute an in-memory implementation for the HTTP client.

use crate::api::error::Result;
use crate::domain::{Playlist, PlaylistSong, RatingDraft, Session, Song};
use async_trait::async_trait;

/// Operations the catalog backend exposes to this client.
///
/// Every method performs a single request-response cycle. Implementations must
/// map backend failures into the [`ApiError`](crate::api::ApiError) taxonomy:
/// connectivity problems as `Unreachable`/`Transport`, reasoned rejections as
/// `Rejected` with the backend's message intact.
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    /// Checks a username against the catalog and opens a session.
    ///
    /// A reply without a user id is an application-level "user not found",
    /// not a transport failure.
    async fn login(&self, username: &str) -> Result<Session>;

    /// Searches songs by title or artist.
    ///
    /// An empty query is sent as-is; the backend decides what it matches.
    /// No matches produce an empty vec, never an error.
    async fn search_songs(&self, query: &str) -> Result<Vec<Song>>;

    /// Submits a star rating with an optional comment.
    async fn submit_rating(&self, rating: &RatingDraft) -> Result<()>;

    /// Lists the playlists owned by a user.
    async fn list_playlists(&self, user_id: i64) -> Result<Vec<Playlist>>;

    /// Creates a playlist and returns the stored record.
    async fn create_playlist(&self, owner_id: i64, name: &str, is_public: bool)
        -> Result<Playlist>;

    /// Renames a playlist. Only the name is updated.
    async fn rename_playlist(&self, playlist_id: i64, new_name: &str) -> Result<()>;

    /// Deletes a playlist.
    ///
    /// Deleting an id that is already gone succeeds, so a repeated delete
    /// converges instead of erroring.
    async fn delete_playlist(&self, playlist_id: i64) -> Result<()>;

    /// Lists the member songs of a playlist.
    async fn list_playlist_songs(&self, playlist_id: i64) -> Result<Vec<PlaylistSong>>;

    /// Adds a song to a playlist.
    ///
    /// Duplicate membership is rejected by the backend with a reason, which
    /// is surfaced verbatim as [`ApiError::Rejected`](crate::api::ApiError).
    async fn add_song_to_playlist(&self, playlist_id: i64, song_id: i64) -> Result<()>;

    /// Removes a song from a playlist.
    ///
    /// Removing a membership that is already gone succeeds.
    async fn remove_song_from_playlist(&self, playlist_id: i64, song_id: i64) -> Result<()>;
}

//! Request and reply body types for the catalog API.
//!
//! Successful listing responses deserialize directly into the domain models
//! (`Song`, `Playlist`, `PlaylistSong`); the types here cover request bodies
//! and the reply shapes that need field-level inspection.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
}

/// Reply of `POST /api/login`.
///
/// A reply that carries `user_id` is a successful login. A 2xx reply without
/// `user_id` means the account does not exist, which is an application-level
/// failure rather than a transport one.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginReply {
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of `POST /api/playlists`.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePlaylistRequest {
    pub owner_id: i64,
    pub name: String,
    pub is_public: bool,
}

/// Body of `PUT /api/playlists/{id}`. Partial update, name only.
#[derive(Debug, Clone, Serialize)]
pub struct RenamePlaylistRequest {
    pub name: String,
}

/// Body of `POST /api/playlists/{id}/songs`.
#[derive(Debug, Clone, Serialize)]
pub struct AddSongRequest {
    pub song_id: i64,
}

/// Generic failure body: `{"error": "..."}`.
///
/// The backend attaches this shape to rejections (duplicate membership,
/// missing playlist). Absence of the `error` field downgrades the reply to a
/// plain server error.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorReply {
    #[serde(default)]
    pub error: Option<String>,
}

//! Request and response protocol between the UI loop and the API worker.

use crate::domain::{PlaylistCard, RatingDraft, Session, Song};

/// Messages sent from the application to the worker.
///
/// Each variant corresponds to one backend operation. The worker performs the
/// calls strictly in arrival order, so two requests fired from one handler
/// are issued sequentially.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    /// Check a username against the catalog and open a session.
    Login { username: String },

    /// Search songs by title or artist.
    SearchSongs { query: String },

    /// Submit a star rating for a song.
    SubmitRating { rating: RatingDraft },

    /// Load the user's playlists together with their member songs.
    LoadPlaylists { user_id: i64 },

    /// Create a new playlist.
    CreatePlaylist {
        owner_id: i64,
        name: String,
        is_public: bool,
    },

    /// Rename an existing playlist.
    RenamePlaylist { playlist_id: i64, new_name: String },

    /// Delete a playlist.
    DeletePlaylist { playlist_id: i64 },

    /// Add a song to a playlist.
    AddSongToPlaylist { playlist_id: i64, song_id: i64 },

    /// Remove a song from a playlist.
    RemoveSongFromPlaylist { playlist_id: i64, song_id: i64 },
}

impl ApiRequest {
    /// Returns the kind tag used to correlate failures with their origin.
    #[must_use]
    pub const fn kind(&self) -> RequestKind {
        match self {
            Self::Login { .. } => RequestKind::Login,
            Self::SearchSongs { .. } => RequestKind::SearchSongs,
            Self::SubmitRating { .. } => RequestKind::SubmitRating,
            Self::LoadPlaylists { .. } => RequestKind::LoadPlaylists,
            Self::CreatePlaylist { .. } => RequestKind::CreatePlaylist,
            Self::RenamePlaylist { .. } => RequestKind::RenamePlaylist,
            Self::DeletePlaylist { .. } => RequestKind::DeletePlaylist,
            Self::AddSongToPlaylist { .. } => RequestKind::AddSong,
            Self::RemoveSongFromPlaylist { .. } => RequestKind::RemoveSong,
        }
    }
}

/// Discriminant of an [`ApiRequest`], carried on failure responses.
///
/// The event handler uses this to decide what a failure means for the UI:
/// a failed login keeps the login view, a failed add keeps the modal open,
/// and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Login,
    SearchSongs,
    SubmitRating,
    LoadPlaylists,
    CreatePlaylist,
    RenamePlaylist,
    DeletePlaylist,
    AddSong,
    RemoveSong,
}

/// Responses sent from the worker back to the application.
///
/// Each variant corresponds to the completion of one request, either with
/// result data or with a user-facing failure message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse {
    /// Login succeeded and a session is open.
    LoggedIn { session: Session },

    /// Search completed; may be empty.
    SearchResults { songs: Vec<Song> },

    /// Rating was stored by the backend.
    RatingSaved,

    /// Playlists and their member songs were loaded.
    PlaylistsLoaded { cards: Vec<PlaylistCard> },

    /// Playlist was created.
    PlaylistCreated,

    /// Playlist was renamed.
    PlaylistRenamed,

    /// Playlist was deleted (or was already gone).
    PlaylistDeleted,

    /// Song was added to a playlist.
    SongAdded,

    /// Song was removed from a playlist (or was already gone).
    SongRemoved,

    /// The request failed.
    ///
    /// `message` is ready to show in the status line: backend-supplied
    /// reasons are passed through verbatim, connectivity failures carry a
    /// generic unreachable message.
    Failed {
        request: RequestKind,
        message: String,
    },
}

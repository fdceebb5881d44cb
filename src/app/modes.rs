//! View and focus state types for the application.
//!
//! This module defines the state machine enums that control which screen is
//! visible and how keyboard input is interpreted. The view set is closed:
//! navigation is an exhaustive `match` over [`View`], so an unmatched view
//! name cannot exist, let alone fail silently.

use crate::app::forms::{AddToPlaylistForm, CreatePlaylistForm, RateForm, RenameForm};

/// Top-level screens of the client.
///
/// Exactly one view is active at any time. Changing views goes through
/// [`AppState::navigate`](crate::app::AppState::navigate), which resets
/// per-view selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Username prompt shown before a session exists.
    Login,

    /// Song search with a results table.
    Search,

    /// Playlist cards with per-song membership actions.
    ///
    /// Entering this view triggers a reload of playlist data from the
    /// backend before the next render shows content.
    Playlists,
}

impl View {
    /// Returns the label shown in the header for this view.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Search => "Search",
            Self::Playlists => "Playlists",
        }
    }
}

/// Focus state within the search view.
///
/// Determines whether keystrokes edit the query or navigate the result rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// Characters are appended to the search query.
    Query,

    /// j/k move the selection through the result rows.
    Results,
}

/// A dialog overlaid on the current view.
///
/// At most one modal is open at a time; opening a modal while another is open
/// replaces it, and closing returns to the underlying view unchanged. Each
/// variant carries its own form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Star rating form for a song picked from the search results.
    Rate(RateForm),

    /// Name and visibility form for a new playlist.
    CreatePlaylist(CreatePlaylistForm),

    /// Playlist picker for adding a song from the search results.
    AddToPlaylist(AddToPlaylistForm),

    /// New-name form for an existing playlist.
    Rename(RenameForm),
}

impl Modal {
    /// Returns the dialog title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Rate(_) => "Rate song",
            Self::CreatePlaylist(_) => "New playlist",
            Self::AddToPlaylist(_) => "Add to playlist",
            Self::Rename(_) => "Rename playlist",
        }
    }
}

//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state.
//! View models are optimized for rendering and contain only display-ready
//! data: sanitized strings, pre-computed highlight ranges, and selection
//! flags. They hold no business logic.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed
//! by the renderer. Text sanitization happens before a string enters a view
//! model, so renderers can embed any field in styled output safely.

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UiViewModel {
    /// Header information (title, signed-in user).
    pub header: HeaderInfo,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,

    /// Optional status line message (confirmation or error).
    pub status: Option<StatusView>,

    /// Body content for the active view.
    pub body: BodyView,

    /// Optional modal dialog drawn over the body.
    pub modal: Option<ModalView>,
}

/// Body content, one variant per view.
#[derive(Debug, Clone)]
pub enum BodyView {
    Login(LoginView),
    Search(SearchView),
    Playlists(PlaylistsView),
}

/// Login view content.
#[derive(Debug, Clone)]
pub struct LoginView {
    /// Current username input.
    pub username: String,
}

/// Search view content.
#[derive(Debug, Clone)]
pub struct SearchView {
    /// Current query text.
    pub query: String,

    /// Whether the query box has focus (affects its border color).
    pub query_focused: bool,

    /// Visible window of result rows.
    pub rows: Vec<SongRow>,

    /// Placeholder shown instead of the table when there are no rows.
    pub empty_state: Option<EmptyState>,
}

/// One row of the search results table.
#[derive(Debug, Clone)]
pub struct SongRow {
    /// Song title, sanitized and truncated to the column width.
    pub title: String,

    /// Artist text, sanitized and truncated to the column width.
    pub artist: String,

    /// Release year display text.
    pub year: String,

    /// Whether this row is currently selected.
    pub is_selected: bool,

    /// Character ranges of the title matching the query.
    ///
    /// Each tuple is `(start, end)` in character indices, exclusive end.
    pub title_highlights: Vec<(usize, usize)>,
}

/// Playlists view content.
#[derive(Debug, Clone)]
pub struct PlaylistsView {
    /// All playlist cards.
    pub cards: Vec<CardView>,

    /// Index of the first card to draw so the selection stays visible.
    pub first_visible: usize,

    /// Placeholder shown when the user has no playlists.
    pub empty_state: Option<EmptyState>,
}

/// Display information for one playlist card.
#[derive(Debug, Clone)]
pub struct CardView {
    /// Playlist name, sanitized and truncated.
    pub name: String,

    /// Visibility text ("public" or "private").
    pub visibility: &'static str,

    /// Whether the playlist is public (selects the badge color).
    pub is_public: bool,

    /// Number of member songs.
    pub song_count: usize,

    /// Whether this card is currently selected.
    pub is_selected: bool,

    /// One line per member song.
    pub entries: Vec<EntryView>,
}

/// One member song line within a card.
#[derive(Debug, Clone)]
pub struct EntryView {
    /// Formatted display line, sanitized and truncated.
    pub line: String,

    /// Whether this song is the removal target.
    pub is_selected: bool,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the current context.
    pub keybindings: String,
}

/// Status line message.
#[derive(Debug, Clone)]
pub struct StatusView {
    /// Whether to use the error styling.
    pub is_error: bool,

    /// Message text.
    pub text: String,
}

/// Placeholder message shown when a listing is empty.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g. "No results found.").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Modal dialog content.
#[derive(Debug, Clone)]
pub struct ModalView {
    /// Dialog title.
    pub title: String,

    /// Optional subject line (e.g. the song being rated).
    pub subtitle: Option<String>,

    /// Labeled fields or selectable options.
    pub fields: Vec<FieldView>,
}

/// One field or option inside a modal dialog.
#[derive(Debug, Clone)]
pub struct FieldView {
    /// Field label or option name.
    pub label: String,

    /// Current value text.
    pub value: String,

    /// Whether this field has focus (or is the highlighted option).
    pub is_focused: bool,
}

//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! client, along with selection management and UI view model generation. It
//! is the single source of truth for all transient UI state: the session,
//! the active view, the open modal, and the last-fetched snapshots of server
//! data.
//!
//! # Snapshots
//!
//! `search_results` and `playlists` hold whatever the last fetch returned.
//! They are never invalidated except by an explicit reload after a mutating
//! action, so the screen always shows a consistent snapshot.
//!
//! # View Model Computation
//!
//! [`AppState::compute_viewmodel`] transforms a state snapshot into a
//! renderable representation, handling windowing, match highlighting, text
//! sanitization, and empty-state selection. Renderers consume the view model
//! and never read state directly.

use crate::app::forms::{PlaylistField, RateField};
use crate::app::modes::{Modal, SearchFocus, View};
use crate::domain::{PlaylistCard, PlaylistSong, Session, Song};
use crate::ui::helpers::{sanitize_text, truncate_chars};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BodyView, CardView, EmptyState, EntryView, FieldView, FooterInfo, HeaderInfo, LoginView,
    ModalView, PlaylistsView, SearchView, SongRow, StatusView, UiViewModel,
};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Maximum characters of a song title shown in the results table.
const TITLE_COLUMN_WIDTH: usize = 38;

/// Maximum characters of an artist name shown in the results table.
const ARTIST_COLUMN_WIDTH: usize = 24;

/// Kind of message in the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Confirmation of a completed action.
    Info,
    /// A failure the user should act on.
    Error,
}

/// One message shown in the status line until the next view change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
}

/// Central application state container.
///
/// Mutated by the event handler in response to user input and worker
/// responses. View models are computed on demand from state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The signed-in user, if any.
    ///
    /// Set atomically on successful login, cleared atomically on logout.
    /// Every other piece of session-dependent state is derived from it.
    pub session: Option<Session>,

    /// Currently active view. Exactly one at any time.
    pub view: View,

    /// Currently open modal dialog, if any.
    pub modal: Option<Modal>,

    /// Username field of the login view.
    pub login_input: String,

    /// Current search query text.
    pub search_query: String,

    /// Whether keystrokes edit the query or navigate results.
    pub search_focus: SearchFocus,

    /// Songs from the most recent completed search.
    pub search_results: Vec<Song>,

    /// Whether any search has completed since entering the view.
    ///
    /// Distinguishes the initial prompt placeholder from the genuine
    /// "no results" placeholder.
    pub searched: bool,

    /// Zero-based index of the selected row within `search_results`.
    pub selected_song: usize,

    /// Playlist cards from the most recent reload.
    pub playlists: Vec<PlaylistCard>,

    /// Zero-based index of the selected card within `playlists`.
    pub selected_playlist: usize,

    /// Zero-based index of the selected song within the selected card.
    pub selected_entry: usize,

    /// Song waiting for the add-to-playlist dialog to open.
    ///
    /// Set when the user asks to add a song; the dialog opens once the fresh
    /// playlist listing arrives, so its choices are current.
    pub pending_add: Option<(i64, String)>,

    /// Whether a catalog request is outstanding.
    ///
    /// While set, submissions are ignored, so a double-press cannot fire
    /// duplicate requests. Cleared when the worker response arrives.
    pub in_flight: bool,

    /// Message shown in the status line.
    pub status: Option<StatusLine>,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates a fresh state showing the login view.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            session: None,
            view: View::Login,
            modal: None,
            login_input: String::new(),
            search_query: String::new(),
            search_focus: SearchFocus::Query,
            search_results: Vec::new(),
            searched: false,
            selected_song: 0,
            playlists: Vec::new(),
            selected_playlist: 0,
            selected_entry: 0,
            pending_add: None,
            in_flight: false,
            status: None,
            theme,
        }
    }

    /// Switches to the given view.
    ///
    /// Resets per-view selection state and clears the status line so stale
    /// messages do not survive navigation. The caller is responsible for
    /// requesting a playlist reload when entering [`View::Playlists`].
    pub fn navigate(&mut self, view: View) {
        tracing::debug!(view = ?view, "navigating");
        self.view = view;
        self.selected_song = 0;
        self.selected_playlist = 0;
        self.selected_entry = 0;
        self.status = None;
        if view == View::Search && self.search_results.is_empty() {
            self.search_focus = SearchFocus::Query;
        }
    }

    /// Opens a session and moves to the search view.
    pub fn login(&mut self, session: Session) {
        tracing::debug!(user_id = session.user_id, username = %session.username, "session opened");
        self.session = Some(session);
        self.login_input.clear();
        self.navigate(View::Search);
    }

    /// Ends the session and resets all session-scoped state in one step.
    pub fn logout(&mut self) {
        tracing::debug!("session closed");
        self.session = None;
        self.modal = None;
        self.search_query.clear();
        self.search_results.clear();
        self.searched = false;
        self.playlists.clear();
        self.pending_add = None;
        self.in_flight = false;
        self.navigate(View::Login);
    }

    /// Opens a modal, replacing any modal already open.
    pub fn open_modal(&mut self, modal: Modal) {
        self.modal = Some(modal);
    }

    /// Closes the open modal. No-op when none is open.
    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Records an error message in the status line.
    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusLine {
            kind: StatusKind::Error,
            text: text.into(),
        });
    }

    /// Records a confirmation message in the status line.
    pub fn set_info(&mut self, text: impl Into<String>) {
        self.status = Some(StatusLine {
            kind: StatusKind::Info,
            text: text.into(),
        });
    }

    /// Moves the search selection down by one, wrapping to the top.
    pub fn move_song_selection_down(&mut self) {
        if self.search_results.is_empty() {
            return;
        }
        self.selected_song = (self.selected_song + 1) % self.search_results.len();
    }

    /// Moves the search selection up by one, wrapping to the bottom.
    pub fn move_song_selection_up(&mut self) {
        if self.search_results.is_empty() {
            return;
        }
        if self.selected_song == 0 {
            self.selected_song = self.search_results.len() - 1;
        } else {
            self.selected_song -= 1;
        }
    }

    /// Returns the selected search result, if any.
    #[must_use]
    pub fn selected_song(&self) -> Option<&Song> {
        self.search_results.get(self.selected_song)
    }

    /// Moves the playlist selection down by one, wrapping.
    ///
    /// Changing cards resets the entry selection to the first song.
    pub fn move_playlist_selection_down(&mut self) {
        if self.playlists.is_empty() {
            return;
        }
        self.selected_playlist = (self.selected_playlist + 1) % self.playlists.len();
        self.selected_entry = 0;
    }

    /// Moves the playlist selection up by one, wrapping.
    pub fn move_playlist_selection_up(&mut self) {
        if self.playlists.is_empty() {
            return;
        }
        if self.selected_playlist == 0 {
            self.selected_playlist = self.playlists.len() - 1;
        } else {
            self.selected_playlist -= 1;
        }
        self.selected_entry = 0;
    }

    /// Returns the selected playlist card, if any.
    #[must_use]
    pub fn selected_card(&self) -> Option<&PlaylistCard> {
        self.playlists.get(self.selected_playlist)
    }

    /// Moves the song selection within the selected card down by one, wrapping.
    pub fn move_entry_selection_down(&mut self) {
        let Some(card) = self.selected_card() else {
            return;
        };
        if card.songs.is_empty() {
            return;
        }
        self.selected_entry = (self.selected_entry + 1) % card.songs.len();
    }

    /// Moves the song selection within the selected card up by one, wrapping.
    pub fn move_entry_selection_up(&mut self) {
        let Some(card) = self.selected_card() else {
            return;
        };
        if card.songs.is_empty() {
            return;
        }
        if self.selected_entry == 0 {
            self.selected_entry = card.songs.len() - 1;
        } else {
            self.selected_entry -= 1;
        }
    }

    /// Returns the selected song within the selected card, if any.
    #[must_use]
    pub fn selected_entry(&self) -> Option<&PlaylistSong> {
        self.selected_card()
            .and_then(|card| card.songs.get(self.selected_entry))
    }

    /// Replaces the playlist snapshot and clamps selections to its bounds.
    pub fn set_playlists(&mut self, cards: Vec<PlaylistCard>) {
        self.playlists = cards;
        if self.playlists.is_empty() {
            self.selected_playlist = 0;
            self.selected_entry = 0;
        } else {
            self.selected_playlist = self.selected_playlist.min(self.playlists.len() - 1);
            let song_count = self.playlists[self.selected_playlist].songs.len();
            self.selected_entry = self.selected_entry.min(song_count.saturating_sub(1));
        }
    }

    /// Computes a renderable view model from current state and terminal size.
    ///
    /// # Parameters
    ///
    /// * `rows` - Terminal height in character cells
    /// * `cols` - Terminal width in character cells
    ///
    /// All user- and server-controlled text is sanitized and truncated here,
    /// at the state-to-display boundary, so renderers only ever see safe
    /// strings.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UiViewModel {
        let body = match self.view {
            View::Login => BodyView::Login(LoginView {
                username: sanitize_text(&self.login_input),
            }),
            View::Search => BodyView::Search(self.compute_search_view(rows)),
            View::Playlists => BodyView::Playlists(self.compute_playlists_view(rows, cols)),
        };

        UiViewModel {
            header: self.compute_header(),
            footer: self.compute_footer(),
            status: self.status.as_ref().map(|status| StatusView {
                is_error: status.kind == StatusKind::Error,
                text: sanitize_text(&status.text),
            }),
            body,
            modal: self.modal.as_ref().map(|modal| self.compute_modal(modal)),
        }
    }

    fn compute_search_view(&self, rows: usize) -> SearchView {
        let empty_state = if self.search_results.is_empty() {
            Some(if self.searched {
                EmptyState {
                    message: "No results found.".to_string(),
                    subtitle: "Try a different search query.".to_string(),
                }
            } else {
                EmptyState {
                    message: "Search the catalog".to_string(),
                    subtitle: "Type a title or artist and press Enter.".to_string(),
                }
            })
        } else {
            None
        };

        let available = Self::search_rows_available(rows);
        let (visible_start, visible_end) = self.visible_window(available);

        let matcher = if self.search_query.is_empty() {
            None
        } else {
            Some(SkimMatcherV2::default())
        };

        let rows: Vec<SongRow> = self.search_results[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, song)| {
                let absolute_idx = visible_start + relative_idx;
                self.compute_song_row(song, absolute_idx, matcher.as_ref())
            })
            .collect();

        SearchView {
            query: sanitize_text(&self.search_query),
            query_focused: self.search_focus == SearchFocus::Query,
            rows,
            empty_state,
        }
    }

    fn compute_song_row(
        &self,
        song: &Song,
        absolute_idx: usize,
        matcher: Option<&SkimMatcherV2>,
    ) -> SongRow {
        let title = truncate_chars(&sanitize_text(&song.title), TITLE_COLUMN_WIDTH);
        let artist = truncate_chars(&sanitize_text(song.artist_label()), ARTIST_COLUMN_WIDTH);

        let title_highlights =
            matcher.map_or_else(Vec::new, |m| self.highlight_ranges(&title, m));

        SongRow {
            title,
            artist,
            year: song.year_label(),
            is_selected: absolute_idx == self.selected_song
                && self.search_focus == SearchFocus::Results,
            title_highlights,
        }
    }

    /// Computes character index ranges to highlight for query matches.
    ///
    /// Coalesces consecutive match indices from the fuzzy matcher into
    /// `(start, end)` ranges, exclusive end.
    fn highlight_ranges(&self, text: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
        let Some((_score, indices)) = matcher.fuzzy_indices(text, &self.search_query) else {
            return vec![];
        };

        let mut ranges = Vec::new();
        let mut start = None;
        let mut prev = None;

        for &idx in &indices {
            match (start, prev) {
                (None, _) => {
                    start = Some(idx);
                    prev = Some(idx);
                }
                (Some(_), Some(p)) if idx == p + 1 => {
                    prev = Some(idx);
                }
                (Some(s), Some(p)) => {
                    ranges.push((s, p + 1));
                    start = Some(idx);
                    prev = Some(idx);
                }
                _ => {}
            }
        }

        if let (Some(s), Some(p)) = (start, prev) {
            ranges.push((s, p + 1));
        }

        ranges
    }

    fn compute_playlists_view(&self, rows: usize, cols: usize) -> PlaylistsView {
        if self.playlists.is_empty() {
            return PlaylistsView {
                cards: vec![],
                first_visible: 0,
                empty_state: Some(EmptyState {
                    message: "No playlists found.".to_string(),
                    subtitle: "Create one with 'n'.".to_string(),
                }),
            };
        }

        let name_width = cols.saturating_sub(20).max(16);
        let cards: Vec<CardView> = self
            .playlists
            .iter()
            .enumerate()
            .map(|(idx, card)| {
                let is_selected = idx == self.selected_playlist;
                let entries: Vec<EntryView> = card
                    .songs
                    .iter()
                    .enumerate()
                    .map(|(song_idx, song)| EntryView {
                        line: truncate_chars(
                            &sanitize_text(&song.display_line()),
                            cols.saturating_sub(8),
                        ),
                        is_selected: is_selected && song_idx == self.selected_entry,
                    })
                    .collect();

                CardView {
                    name: truncate_chars(&sanitize_text(&card.playlist.name), name_width),
                    visibility: card.playlist.visibility_label(),
                    is_public: card.playlist.is_public,
                    song_count: card.songs.len(),
                    is_selected,
                    entries,
                }
            })
            .collect();

        let first_visible = Self::first_visible_card(
            &cards,
            self.selected_playlist,
            Self::playlist_rows_available(rows),
        );

        PlaylistsView {
            cards,
            first_visible,
            empty_state: None,
        }
    }

    /// Finds the first card to draw so the selected card fits on screen.
    ///
    /// Walks backwards from the selection, accumulating card heights until
    /// the available space is used up.
    fn first_visible_card(cards: &[CardView], selected: usize, available: usize) -> usize {
        let height = |card: &CardView| card.entries.len().max(1) + 3;

        let mut first = selected;
        let mut used = height(&cards[selected]);
        while first > 0 && used + height(&cards[first - 1]) <= available {
            first -= 1;
            used += height(&cards[first]);
        }
        first
    }

    fn compute_header(&self) -> HeaderInfo {
        let label = match self.view {
            View::Login => "Tunedex".to_string(),
            View::Search => format!(
                "Tunedex / {} ({})",
                self.view.title(),
                self.search_results.len()
            ),
            View::Playlists => {
                format!("Tunedex / {} ({})", self.view.title(), self.playlists.len())
            }
        };

        let title = match &self.session {
            Some(session) => format!(" {label} [{}] ", sanitize_text(&session.username)),
            None => format!(" {label} "),
        };

        HeaderInfo { title }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if let Some(modal) = &self.modal {
            match modal {
                Modal::Rate(_) | Modal::CreatePlaylist(_) => {
                    "Tab: next field  Enter: save  Esc: cancel".to_string()
                }
                Modal::AddToPlaylist(_) => "j/k: choose  Enter: add  Esc: cancel".to_string(),
                Modal::Rename(_) => "Enter: save  Esc: cancel".to_string(),
            }
        } else {
            match (self.view, self.search_focus) {
                (View::Login, _) => "Enter: sign in  Ctrl+c: quit".to_string(),
                (View::Search, SearchFocus::Query) => {
                    "Enter: search  Esc: results  Ctrl+c: quit".to_string()
                }
                (View::Search, SearchFocus::Results) => {
                    "j/k: navigate  /: search  r: rate  a: add to playlist  p: playlists  l: log out  q: quit"
                        .to_string()
                }
                (View::Playlists, _) => {
                    "j/k: playlists  J/K: songs  n: new  r: rename  d: delete  x: remove song  s: search  l: log out  q: quit"
                        .to_string()
                }
            }
        };

        FooterInfo { keybindings }
    }

    fn compute_modal(&self, modal: &Modal) -> ModalView {
        match modal {
            Modal::Rate(form) => ModalView {
                title: modal.title().to_string(),
                subtitle: Some(truncate_chars(&sanitize_text(&form.song_title), 48)),
                fields: vec![
                    FieldView {
                        label: "Stars (1-5)".to_string(),
                        value: sanitize_text(&form.stars),
                        is_focused: form.focus == RateField::Stars,
                    },
                    FieldView {
                        label: "Comment".to_string(),
                        value: sanitize_text(&form.comment),
                        is_focused: form.focus == RateField::Comment,
                    },
                ],
            },
            Modal::CreatePlaylist(form) => ModalView {
                title: modal.title().to_string(),
                subtitle: None,
                fields: vec![
                    FieldView {
                        label: "Name".to_string(),
                        value: sanitize_text(&form.name),
                        is_focused: form.focus == PlaylistField::Name,
                    },
                    FieldView {
                        label: "Visibility (space to toggle)".to_string(),
                        value: if form.is_public { "public" } else { "private" }.to_string(),
                        is_focused: form.focus == PlaylistField::Visibility,
                    },
                ],
            },
            Modal::AddToPlaylist(form) => ModalView {
                title: modal.title().to_string(),
                subtitle: Some(truncate_chars(&sanitize_text(&form.song_title), 48)),
                fields: form
                    .playlists
                    .iter()
                    .enumerate()
                    .map(|(idx, playlist)| FieldView {
                        label: truncate_chars(&sanitize_text(&playlist.name), 40),
                        value: playlist.visibility_label().to_string(),
                        is_focused: idx == form.selected,
                    })
                    .collect(),
            },
            Modal::Rename(form) => ModalView {
                title: modal.title().to_string(),
                subtitle: Some(truncate_chars(&sanitize_text(&form.original_name), 48)),
                fields: vec![FieldView {
                    label: "New name".to_string(),
                    value: sanitize_text(&form.name),
                    is_focused: true,
                }],
            },
        }
    }

    /// Rows available for result rows after subtracting UI chrome.
    ///
    /// Chrome: blank line, header, border, query box (3 rows), table header
    /// on top; border, status line, and footer at the bottom.
    const fn search_rows_available(total_rows: usize) -> usize {
        total_rows.saturating_sub(11)
    }

    /// Rows available for playlist cards after subtracting UI chrome.
    const fn playlist_rows_available(total_rows: usize) -> usize {
        total_rows.saturating_sub(7)
    }

    /// Computes the visible window of search results around the selection.
    fn visible_window(&self, available: usize) -> (usize, usize) {
        if self.search_results.is_empty() || available == 0 {
            return (0, 0);
        }

        let mut visible_start = self.selected_song.saturating_sub(available / 2);
        let visible_end = (visible_start + available).min(self.search_results.len());

        let actual_count = visible_end - visible_start;
        if actual_count < available && self.search_results.len() >= available {
            visible_start = visible_end.saturating_sub(available);
        }

        (visible_start, visible_end)
    }
}

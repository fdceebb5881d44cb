//! Composable UI component renderers.
//!
//! Each component renders one part of the interface and returns the next
//! free row, so layouts compose by threading a row cursor through the
//! components in order.
//!
//! # Components
//!
//! - [`header`]: Title bar with view name and signed-in user
//! - [`footer`]: Keybinding hints for the current context
//! - [`input`]: Bordered single-line text input (login, search query)
//! - [`table`]: Search results with TITLE, ARTIST, YEAR columns
//! - [`playlists`]: Playlist cards with member song lines
//! - [`modal`]: Centered dialog overlay
//! - [`status`]: One-line confirmation or error message
//! - [`empty`]: Centered placeholder for empty listings
//!
//! # Layouts
//!
//! Three layout functions assemble the views:
//!
//! - [`render_login_view`]: Header + username box + hint
//! - [`render_search_view`]: Header + query box + results table
//! - [`render_playlists_view`]: Header + cards
//!
//! All three share the bottom chrome (border, status line, footer).

mod empty;
mod footer;
mod header;
mod input;
mod modal;
mod playlists;
mod status;
mod table;

pub use modal::render_modal;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{LoginView, PlaylistsView, SearchView, UiViewModel};

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use input::render_input_box;
use playlists::render_playlist_cards;
use status::render_status;
use table::{render_results_headers, render_results_rows};

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1).
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the chrome shared by every view: top header block and the bottom
/// border, status line, and footer.
///
/// # Returns
///
/// The first row available for body content.
fn render_chrome(vm: &UiViewModel, theme: &Theme, cols: usize, rows: usize) -> usize {
    let mut current_row = 2;
    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    let footer_row = rows.saturating_sub(1).max(current_row + 2);
    let status_row = footer_row - 1;
    let border_row = status_row - 1;

    render_border(border_row, &theme.colors.border, cols);
    if let Some(status) = &vm.status {
        render_status(status_row, status, theme, cols);
    }
    render_footer(footer_row, &vm.footer, theme, cols);

    current_row
}

/// Renders the login view layout.
pub fn render_login_view(vm: &UiViewModel, login: &LoginView, theme: &Theme, cols: usize, rows: usize) {
    let _body_start = render_chrome(vm, theme, cols, rows);

    let box_row = (rows / 3).max(5);
    let next = render_input_box(box_row, "Username", &login.username, true, theme, cols);

    position_cursor(next + 1, 1);
    let hint = "Sign in with your catalog username to get started.";
    let padding = cols.saturating_sub(hint.chars().count()) / 2;
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}{hint}", " ".repeat(padding));
    print!("{}", Theme::reset());
}

/// Renders the search view layout.
pub fn render_search_view(
    vm: &UiViewModel,
    search: &SearchView,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let body_start = render_chrome(vm, theme, cols, rows);

    let mut current_row = render_input_box(
        body_start,
        "Search",
        &search.query,
        search.query_focused,
        theme,
        cols,
    );

    if let Some(empty) = &search.empty_state {
        render_empty_state(current_row + 2, empty, theme, cols);
        return;
    }

    current_row = render_results_headers(current_row, theme);
    render_results_rows(current_row, &search.rows, theme, cols);
}

/// Renders the playlists view layout.
pub fn render_playlists_view(
    vm: &UiViewModel,
    playlists: &PlaylistsView,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let body_start = render_chrome(vm, theme, cols, rows);

    if let Some(empty) = &playlists.empty_state {
        render_empty_state(body_start + 2, empty, theme, cols);
        return;
    }

    let max_row = rows.saturating_sub(3);
    render_playlist_cards(body_start, playlists, theme, cols, max_row);
}

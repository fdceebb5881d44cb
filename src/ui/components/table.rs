//! Search results table renderer.
//!
//! Renders the song results as a three-column table with TITLE, ARTIST, and
//! YEAR columns, supporting selection highlighting and query match
//! highlighting within titles.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SongRow;

/// Fixed width of the TITLE column, including the separator space.
const TITLE_COLUMN: usize = 40;

/// Fixed width of the ARTIST column, including the separator space.
const ARTIST_COLUMN: usize = 26;

/// Renders the table column headers at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1).
pub fn render_results_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        "{:<title$}{:<artist$}{}",
        "TITLE",
        "ARTIST",
        "YEAR",
        title = TITLE_COLUMN,
        artist = ARTIST_COLUMN
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all result rows starting at the specified row.
///
/// # Returns
///
/// The next available row position (row + number of rows).
pub fn render_results_rows(row: usize, items: &[SongRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_result_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single result row.
///
/// The selected row gets a full-width background; query matches within the
/// title are highlighted on unselected rows. The row is padded to the full
/// terminal width so the selection background covers the whole line.
fn render_result_row(row: usize, item: &SongRow, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    if item.title_highlights.is_empty() {
        print!("{}", item.title);
    } else {
        helpers::render_highlighted_text(
            &item.title,
            &item.title_highlights,
            theme,
            item.is_selected,
        );
    }

    // Column content is pre-truncated by the view model; only pad here.
    let title_len = item.title.chars().count().min(TITLE_COLUMN);
    print!("{}", " ".repeat(TITLE_COLUMN.saturating_sub(title_len)));

    // Highlighting resets styling, so restore the row colors for the rest.
    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    }

    print!("{}", item.artist);
    let artist_len = item.artist.chars().count().min(ARTIST_COLUMN);
    print!("{}", " ".repeat(ARTIST_COLUMN.saturating_sub(artist_len)));

    print!("{}", item.year);
    let line_len = TITLE_COLUMN + ARTIST_COLUMN + item.year.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}

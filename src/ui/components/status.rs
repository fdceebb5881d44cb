//! Status line renderer.
//!
//! Renders the one-line message area above the footer: confirmations in the
//! info color, failures in the error color. Errors stay until the user acts
//! again; nothing retries on its own.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::StatusView;

/// Renders the status line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1).
pub fn render_status(row: usize, status: &StatusView, theme: &Theme, cols: usize) -> usize {
    let color = if status.is_error {
        &theme.colors.error_fg
    } else {
        &theme.colors.info_fg
    };

    let text: String = status.text.chars().take(cols.saturating_sub(2)).collect();

    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!(" {text}");
    print!("{}", Theme::reset());
    row + 1
}

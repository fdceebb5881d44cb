//! Input box component renderer.
//!
//! Renders a single-line labeled text input inside a bordered 3-row frame.
//! Used for the login username prompt and the search query box.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;

/// Horizontal margin around the input box.
const INPUT_BOX_MARGIN: usize = 5;

/// Renders a bordered input box at the specified row.
///
/// Layout:
///
/// ```text
/// [margin] ┌─────────────────┐ [margin]
/// [margin] │ Label: value_   │ [margin]
/// [margin] └─────────────────┘ [margin]
/// ```
///
/// A trailing `_` marks the insertion point while the box has focus, and the
/// border switches to the focused color.
///
/// # Returns
///
/// The next available row position (row + 3).
pub fn render_input_box(
    row: usize,
    label: &str,
    value: &str,
    focused: bool,
    theme: &Theme,
    cols: usize,
) -> usize {
    let box_width = cols.saturating_sub(INPUT_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    let border_color = if focused {
        &theme.colors.input_border_focused
    } else {
        &theme.colors.input_border
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(INPUT_BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let cursor = if focused { "_" } else { "" };
    let text = format!(" {label}: {value}{cursor}");
    let text_len = text.chars().count().min(inner_width);
    let shown: String = text.chars().take(inner_width).collect();
    let padding = inner_width.saturating_sub(text_len);

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(INPUT_BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{shown}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(border_color));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(INPUT_BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}

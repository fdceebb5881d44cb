//! Shared rendering utilities and helpers.
//!
//! This module provides the low-level text utilities used across UI
//! components: cursor positioning, match highlighting, and the sanitization
//! that keeps user- and server-controlled text from corrupting the output
//! stream.
//!
//! # Sanitization
//!
//! Rendered output is a stream of ANSI escape sequences, so any text embedded
//! in it must not be able to introduce sequences of its own. A song title is
//! arbitrary backend data; one containing a raw ESC byte could recolor the
//! screen, move the cursor, or worse. [`sanitize_text`] strips every control
//! character, so hostile values (`<script>`, `\x1b[31m...`) come out as plain
//! literal text.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses the ANSI sequence `\x1b[{row};{col}H`. Coordinates are 1-indexed.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Clears the screen.
pub fn clear_screen() {
    print!("\u{1b}[2J");
}

/// Replaces every control character in `text` with a space.
///
/// Covers C0 controls (including ESC, newline, tab), DEL, and C1 controls.
/// The result renders as literal text no matter what the input contained.
///
/// # Examples
///
/// ```
/// use tunedex::ui::helpers::sanitize_text;
///
/// assert_eq!(sanitize_text("plain title"), "plain title");
/// assert_eq!(sanitize_text("<script>"), "<script>");
/// assert_eq!(sanitize_text("red\u{1b}[31m!"), "red [31m!");
/// ```
#[must_use]
pub fn sanitize_text(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_control() || ('\u{80}'..='\u{9f}').contains(&c) {
                ' '
            } else {
                c
            }
        })
        .collect()
}

/// Truncates `text` to at most `max_chars` characters, appending `...` when
/// anything was cut.
///
/// Operates on character boundaries, never byte offsets, so multi-byte
/// titles cannot be split mid-character.
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let kept: String = text.chars().take(keep).collect();
    format!("{kept}...")
}

/// Renders text with highlighted character ranges for query matches.
///
/// Splits the text into highlighted and normal sections based on the provided
/// character ranges. Highlighting is skipped entirely for selected rows so it
/// does not fight the selection background.
///
/// # Parameters
///
/// * `text` - The text to render
/// * `ranges` - Character index ranges to highlight, `(start, end)` exclusive end
/// * `theme` - Active color theme
/// * `is_selected` - Whether the row is currently selected
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end.min(chars.len())].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_leaves_markup_as_literal_text() {
        let hostile = "<script>alert('x')</script>";
        assert_eq!(sanitize_text(hostile), hostile);
    }

    #[test]
    fn sanitize_strips_escape_and_control_bytes() {
        let out = sanitize_text("a\u{1b}[31mb\nc\td\u{7f}e");
        assert!(!out.contains('\u{1b}'));
        assert!(!out.contains('\n'));
        assert!(!out.contains('\t'));
        assert!(!out.contains('\u{7f}'));
        assert_eq!(out, "a [31mb c d e");
    }

    #[test]
    fn sanitize_strips_c1_controls() {
        let out = sanitize_text("a\u{9b}31mb");
        assert!(!out.contains('\u{9b}'));
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("a very long title here", 10), "a very ...");
        // Multi-byte characters count as one and never split.
        assert_eq!(truncate_chars("日本語のタイトルです", 8), "日本語のタ...");
    }
}

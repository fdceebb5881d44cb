//! Playlist card renderer.
//!
//! Renders each playlist as a card: a header line with name, visibility
//! badge, and song count, followed by one line per member song. The selected
//! card carries a marker and its selected song carries the selection
//! background, marking the removal target.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CardView, PlaylistsView};

/// Renders playlist cards starting at the specified row.
///
/// Starts from `view.first_visible` so the selected card is on screen, and
/// stops before `max_row` to leave the bottom chrome intact.
///
/// # Returns
///
/// The next available row position.
pub fn render_playlist_cards(
    row: usize,
    view: &PlaylistsView,
    theme: &Theme,
    cols: usize,
    max_row: usize,
) -> usize {
    let mut current_row = row;
    for card in &view.cards[view.first_visible..] {
        let height = card.entries.len().max(1) + 2;
        if current_row + height > max_row {
            break;
        }
        current_row = render_card(current_row, card, theme, cols);
    }
    current_row
}

/// Renders one playlist card.
fn render_card(row: usize, card: &CardView, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let marker = if card.is_selected { "▸ " } else { "  " };
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{marker}");
    print!("{}", Theme::bold());
    print!("{}", card.name);
    print!("{}", Theme::reset());

    let badge_color = if card.is_public {
        &theme.colors.public_fg
    } else {
        &theme.colors.private_fg
    };
    print!("{}", Theme::fg(badge_color));
    print!(" [{}]", card.visibility);
    print!("{}", Theme::reset());

    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!(
        " ({} {})",
        card.song_count,
        if card.song_count == 1 { "song" } else { "songs" }
    );
    print!("{}", Theme::reset());

    let mut current_row = row + 1;

    if card.entries.is_empty() {
        position_cursor(current_row, 1);
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("    No songs in this playlist yet.");
        print!("{}", Theme::reset());
        current_row += 1;
    } else {
        for entry in &card.entries {
            position_cursor(current_row, 1);
            print!("    ");
            if entry.is_selected {
                print!("{}", Theme::fg(&theme.colors.selection_fg));
                print!("{}", Theme::bg(&theme.colors.selection_bg));
            } else {
                print!("{}", Theme::fg(&theme.colors.text_normal));
            }
            print!("{}", entry.line);
            if entry.is_selected {
                let line_len = 4 + entry.line.chars().count();
                print!("{}", " ".repeat(cols.saturating_sub(line_len)));
            }
            print!("{}", Theme::reset());
            current_row += 1;
        }
    }

    // Blank spacing line between cards.
    current_row + 1
}

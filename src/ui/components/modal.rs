//! Modal dialog renderer.
//!
//! Renders a centered bordered box over the current view with a title,
//! optional subject line, and labeled fields. The focused field (or the
//! highlighted option in a picker) is marked with the selection colors.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ModalView;

/// Preferred dialog width before clamping to the terminal.
const DIALOG_WIDTH: usize = 56;

/// Renders the modal dialog centered on screen.
///
/// The dialog is drawn last in the frame, over the body, which is what makes
/// it an overlay: no compositing, later writes simply win.
pub fn render_modal(modal: &ModalView, theme: &Theme, cols: usize, rows: usize) {
    let width = DIALOG_WIDTH.min(cols.saturating_sub(4)).max(20);
    let inner_width = width - 2;

    let mut lines = Vec::new();
    lines.push(Line::Title(modal.title.clone()));
    if let Some(subtitle) = &modal.subtitle {
        lines.push(Line::Subtitle(subtitle.clone()));
    }
    lines.push(Line::Blank);
    if modal.fields.is_empty() {
        lines.push(Line::Subtitle("(no playlists yet)".to_string()));
    } else {
        for (idx, _) in modal.fields.iter().enumerate() {
            lines.push(Line::Field(idx));
        }
    }

    let height = lines.len() + 2;
    let top = rows.saturating_sub(height) / 2;
    let top = top.max(2);
    let left = cols.saturating_sub(width) / 2 + 1;

    position_cursor(top, left);
    print!("{}", Theme::fg(&theme.colors.input_border_focused));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    for (offset, line) in lines.iter().enumerate() {
        position_cursor(top + 1 + offset, left);
        print!("{}", Theme::fg(&theme.colors.input_border_focused));
        print!("│");
        render_line(modal, line, theme, inner_width);
        print!("{}", Theme::fg(&theme.colors.input_border_focused));
        print!("│");
        print!("{}", Theme::reset());
    }

    position_cursor(top + 1 + lines.len(), left);
    print!("{}", Theme::fg(&theme.colors.input_border_focused));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());
}

/// One row of dialog content.
enum Line {
    Title(String),
    Subtitle(String),
    Blank,
    Field(usize),
}

fn render_line(modal: &ModalView, line: &Line, theme: &Theme, inner_width: usize) {
    match line {
        Line::Title(title) => {
            let text = clip(&format!(" {title}"), inner_width);
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.header_fg));
            print!("{text}");
            print!("{}", pad(&text, inner_width));
            print!("{}", Theme::reset());
        }
        Line::Subtitle(subtitle) => {
            let text = clip(&format!(" {subtitle}"), inner_width);
            print!("{}", Theme::dim());
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print!("{text}");
            print!("{}", pad(&text, inner_width));
            print!("{}", Theme::reset());
        }
        Line::Blank => {
            print!("{}", " ".repeat(inner_width));
        }
        Line::Field(idx) => {
            let field = &modal.fields[*idx];
            let marker = if field.is_focused { "> " } else { "  " };
            let text = clip(
                &format!(" {marker}{}: {}", field.label, field.value),
                inner_width,
            );
            if field.is_focused {
                print!("{}", Theme::fg(&theme.colors.selection_fg));
                print!("{}", Theme::bg(&theme.colors.selection_bg));
            } else {
                print!("{}", Theme::fg(&theme.colors.text_normal));
            }
            print!("{text}");
            print!("{}", pad(&text, inner_width));
            print!("{}", Theme::reset());
        }
    }
}

/// Clips text to the inner width on character boundaries.
fn clip(text: &str, inner_width: usize) -> String {
    text.chars().take(inner_width).collect()
}

/// Returns the spaces needed to fill the rest of the line.
fn pad(text: &str, inner_width: usize) -> String {
    " ".repeat(inner_width.saturating_sub(text.chars().count()))
}

//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view
//! model computation and delegation to the UI components. One call renders
//! one complete frame: the active view, the status line, and any open modal
//! drawn over the top.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::clear_screen;
use crate::ui::viewmodel::BodyView;

/// Renders the client UI to stdout.
///
/// Computes the view model from application state, clears the screen, and
/// delegates to the layout for the active view. The modal, when open, is
/// drawn last so it overlays the body.
///
/// # Parameters
///
/// * `state` - Current application state
/// * `rows` - Terminal height in rows
/// * `cols` - Terminal width in columns
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let vm = state.compute_viewmodel(rows, cols);

    clear_screen();

    match &vm.body {
        BodyView::Login(login) => {
            components::render_login_view(&vm, login, &state.theme, cols, rows);
        }
        BodyView::Search(search) => {
            components::render_search_view(&vm, search, &state.theme, cols, rows);
        }
        BodyView::Playlists(playlists) => {
            components::render_playlists_view(&vm, playlists, &state.theme, cols, rows);
        }
    }

    if let Some(modal) = &vm.modal {
        components::render_modal(modal, &state.theme, cols, rows);
    }
}

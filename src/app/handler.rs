//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input
//! and worker responses, translating them into state changes and action
//! sequences. It is the primary control flow coordinator of the client.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the terminal shim or the API worker
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! Every catalog operation is a single request-response cycle: a form submit
//! emits a [`Action::CallApi`], the worker's answer re-enters as
//! [`Event::Api`], and the follow-up (close a modal, reload a listing,
//! navigate) happens there. Failures never propagate past the current event;
//! they land in the status line and the user retries.
//!
//! # Duplicate submissions
//!
//! While a request is outstanding (`AppState::in_flight`), submit events are
//! ignored, so double-pressing Enter cannot fire the same request twice.

use crate::app::actions::Action;
use crate::app::forms::{
    AddToPlaylistForm, CreatePlaylistForm, PlaylistField, RateForm, RenameForm,
};
use crate::app::modes::{Modal, SearchFocus, View};
use crate::app::state::AppState;
use crate::domain::error::Result;
use crate::worker::{ApiRequest, ApiResponse, RequestKind};

/// Events triggered by user input or worker responses.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The terminal shim maps raw key presses onto these
/// based on the current view, focus, and open modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Appends a character to the focused text field.
    Char(char),
    /// Removes the last character from the focused text field.
    Backspace,
    /// Moves focus to the next form field.
    Tab,
    /// Submits the focused form or runs the search.
    Enter,
    /// Closes the open modal, or leaves the query field.
    Esc,
    /// Moves the active selection down by one (wraps).
    KeyDown,
    /// Moves the active selection up by one (wraps).
    KeyUp,
    /// Moves the song selection within the selected playlist down.
    NextEntry,
    /// Moves the song selection within the selected playlist up.
    PrevEntry,
    /// Focuses the search query field.
    FocusQuery,
    /// Opens the rating dialog for the selected search result.
    OpenRateModal,
    /// Opens the add-to-playlist dialog for the selected search result.
    ///
    /// Playlists are fetched first so the picker shows current data; the
    /// dialog opens when the listing arrives.
    OpenAddModal,
    /// Opens the playlist creation dialog.
    OpenCreateModal,
    /// Opens the rename dialog for the selected playlist.
    OpenRenameModal,
    /// Deletes the selected playlist.
    DeletePlaylist,
    /// Removes the selected song from the selected playlist.
    RemoveSong,
    /// Switches to the search view.
    ShowSearch,
    /// Switches to the playlists view and reloads its data.
    ShowPlaylists,
    /// Ends the session and returns to the login view.
    Logout,
    /// Exits the application.
    Quit,
    /// A worker response for an earlier request.
    Api(ApiResponse),
}

/// Processes an event, mutates application state, and returns actions.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// A `(should_render, actions)` pair. `should_render` is `true` when the
/// event changed something visible; the actions are executed in order by the
/// runtime shim.
///
/// # Errors
///
/// Reserved for state-machine failures; user-facing problems (bad input,
/// rejected requests) are reported through the status line instead of the
/// error channel.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event_name(event)).entered();

    match event {
        Event::Char(c) => Ok((insert_char(state, *c), vec![])),
        Event::Backspace => Ok((delete_char(state), vec![])),
        Event::Tab => {
            match &mut state.modal {
                Some(Modal::Rate(form)) => form.focus_next(),
                Some(Modal::CreatePlaylist(form)) => form.focus_next(),
                _ => return Ok((false, vec![])),
            }
            Ok((true, vec![]))
        }
        Event::Enter => Ok(submit(state)),
        Event::Esc => {
            if state.modal.is_some() {
                state.close_modal();
                return Ok((true, vec![]));
            }
            if state.view == View::Search && state.search_focus == SearchFocus::Query {
                state.search_focus = SearchFocus::Results;
                return Ok((true, vec![]));
            }
            Ok((false, vec![]))
        }
        Event::KeyDown => Ok((move_selection(state, true), vec![])),
        Event::KeyUp => Ok((move_selection(state, false), vec![])),
        Event::NextEntry => {
            if state.view != View::Playlists {
                return Ok((false, vec![]));
            }
            state.move_entry_selection_down();
            Ok((true, vec![]))
        }
        Event::PrevEntry => {
            if state.view != View::Playlists {
                return Ok((false, vec![]));
            }
            state.move_entry_selection_up();
            Ok((true, vec![]))
        }
        Event::FocusQuery => {
            if state.view != View::Search {
                return Ok((false, vec![]));
            }
            state.search_focus = SearchFocus::Query;
            Ok((true, vec![]))
        }
        Event::OpenRateModal => {
            let Some(song) = state.selected_song() else {
                return Ok((false, vec![]));
            };
            tracing::debug!(song_id = song.song_id, "opening rate dialog");
            let form = RateForm::new(song.song_id, song.title.clone());
            state.open_modal(Modal::Rate(form));
            Ok((true, vec![]))
        }
        Event::OpenAddModal => {
            if state.in_flight {
                return Ok((false, vec![]));
            }
            let Some(session) = state.session.clone() else {
                return Ok((false, vec![]));
            };
            let Some(song) = state.selected_song() else {
                return Ok((false, vec![]));
            };
            let (song_id, song_title) = (song.song_id, song.title.clone());
            tracing::debug!(song_id = song_id, "fetching playlists for add dialog");
            state.pending_add = Some((song_id, song_title));
            Ok((
                true,
                call(
                    state,
                    ApiRequest::LoadPlaylists {
                        user_id: session.user_id,
                    },
                ),
            ))
        }
        Event::OpenCreateModal => {
            if state.view != View::Playlists {
                return Ok((false, vec![]));
            }
            state.open_modal(Modal::CreatePlaylist(CreatePlaylistForm::new()));
            Ok((true, vec![]))
        }
        Event::OpenRenameModal => {
            let Some(card) = state.selected_card() else {
                return Ok((false, vec![]));
            };
            let form = RenameForm::new(card.playlist.playlist_id, card.playlist.name.clone());
            state.open_modal(Modal::Rename(form));
            Ok((true, vec![]))
        }
        Event::DeletePlaylist => {
            if state.in_flight {
                return Ok((false, vec![]));
            }
            let Some(card) = state.selected_card() else {
                return Ok((false, vec![]));
            };
            let playlist_id = card.playlist.playlist_id;
            tracing::debug!(playlist_id = playlist_id, "deleting playlist");
            Ok((true, call(state, ApiRequest::DeletePlaylist { playlist_id })))
        }
        Event::RemoveSong => {
            if state.in_flight {
                return Ok((false, vec![]));
            }
            let Some(card) = state.selected_card() else {
                return Ok((false, vec![]));
            };
            let playlist_id = card.playlist.playlist_id;
            let Some(entry) = state.selected_entry() else {
                return Ok((false, vec![]));
            };
            let song_id = entry.song_id;
            tracing::debug!(playlist_id = playlist_id, song_id = song_id, "removing song");
            Ok((
                true,
                call(
                    state,
                    ApiRequest::RemoveSongFromPlaylist {
                        playlist_id,
                        song_id,
                    },
                ),
            ))
        }
        Event::ShowSearch => {
            if state.session.is_none() {
                return Ok((false, vec![]));
            }
            state.navigate(View::Search);
            Ok((true, vec![]))
        }
        Event::ShowPlaylists => {
            let Some(session) = state.session.clone() else {
                return Ok((false, vec![]));
            };
            state.navigate(View::Playlists);
            // Entering the view always refreshes its data.
            Ok((
                true,
                call(
                    state,
                    ApiRequest::LoadPlaylists {
                        user_id: session.user_id,
                    },
                ),
            ))
        }
        Event::Logout => {
            state.logout();
            Ok((true, vec![]))
        }
        Event::Quit => Ok((false, vec![Action::Quit])),
        Event::Api(response) => Ok(handle_api_response(state, response)),
    }
}

/// Routes a typed character to the focused text field.
fn insert_char(state: &mut AppState, c: char) -> bool {
    if let Some(modal) = &mut state.modal {
        match modal {
            Modal::Rate(form) => {
                form.active_field_mut().push(c);
                return true;
            }
            Modal::CreatePlaylist(form) => {
                if form.focus == PlaylistField::Visibility {
                    if c == ' ' {
                        form.toggle_visibility();
                        return true;
                    }
                    return false;
                }
                form.name.push(c);
                return true;
            }
            Modal::Rename(form) => {
                form.name.push(c);
                return true;
            }
            Modal::AddToPlaylist(_) => return false,
        }
    }

    match (state.view, state.search_focus) {
        (View::Login, _) => {
            state.login_input.push(c);
            true
        }
        (View::Search, SearchFocus::Query) => {
            state.search_query.push(c);
            true
        }
        _ => false,
    }
}

/// Removes the last character from the focused text field.
fn delete_char(state: &mut AppState) -> bool {
    if let Some(modal) = &mut state.modal {
        match modal {
            Modal::Rate(form) => {
                form.active_field_mut().pop();
                return true;
            }
            Modal::CreatePlaylist(form) => {
                if form.focus == PlaylistField::Name {
                    form.name.pop();
                    return true;
                }
                return false;
            }
            Modal::Rename(form) => {
                form.name.pop();
                return true;
            }
            Modal::AddToPlaylist(_) => return false,
        }
    }

    match (state.view, state.search_focus) {
        (View::Login, _) => {
            state.login_input.pop();
            true
        }
        (View::Search, SearchFocus::Query) => {
            state.search_query.pop();
            true
        }
        _ => false,
    }
}

/// Moves whichever selection the current context owns.
fn move_selection(state: &mut AppState, down: bool) -> bool {
    if let Some(Modal::AddToPlaylist(form)) = &mut state.modal {
        if down {
            form.select_next();
        } else {
            form.select_prev();
        }
        return true;
    }
    if state.modal.is_some() {
        return false;
    }

    match state.view {
        View::Search => {
            if state.search_focus != SearchFocus::Results {
                return false;
            }
            if down {
                state.move_song_selection_down();
            } else {
                state.move_song_selection_up();
            }
            true
        }
        View::Playlists => {
            if down {
                state.move_playlist_selection_down();
            } else {
                state.move_playlist_selection_up();
            }
            true
        }
        View::Login => false,
    }
}

/// Handles Enter: submits the open form, or runs the pending search.
///
/// All request-emitting paths are gated on the in-flight flag. Input
/// validation failures land in the status line and keep the form open.
fn submit(state: &mut AppState) -> (bool, Vec<Action>) {
    if state.in_flight {
        tracing::debug!("submit ignored, request in flight");
        return (false, vec![]);
    }

    if let Some(modal) = state.modal.clone() {
        return submit_modal(state, &modal);
    }

    match (state.view, state.search_focus) {
        (View::Login, _) => {
            let username = state.login_input.trim().to_string();
            if username.is_empty() {
                state.set_error("Enter a username");
                return (true, vec![]);
            }
            (true, call(state, ApiRequest::Login { username }))
        }
        (View::Search, SearchFocus::Query) => {
            let query = state.search_query.clone();
            (true, call(state, ApiRequest::SearchSongs { query }))
        }
        _ => (false, vec![]),
    }
}

/// Submits the given modal's form.
fn submit_modal(state: &mut AppState, modal: &Modal) -> (bool, Vec<Action>) {
    let Some(session) = state.session.clone() else {
        state.set_error("Not signed in");
        return (true, vec![]);
    };

    match modal {
        Modal::Rate(form) => match form.to_draft(session.user_id) {
            Ok(rating) => (true, call(state, ApiRequest::SubmitRating { rating })),
            Err(e) => {
                state.set_error(e.to_string());
                (true, vec![])
            }
        },
        Modal::CreatePlaylist(form) => match form.validated_name() {
            Ok(name) => (
                true,
                call(
                    state,
                    ApiRequest::CreatePlaylist {
                        owner_id: session.user_id,
                        name,
                        is_public: form.is_public,
                    },
                ),
            ),
            Err(e) => {
                state.set_error(e.to_string());
                (true, vec![])
            }
        },
        Modal::AddToPlaylist(form) => match form.selected_playlist() {
            Ok(playlist) => {
                let request = ApiRequest::AddSongToPlaylist {
                    playlist_id: playlist.playlist_id,
                    song_id: form.song_id,
                };
                (true, call(state, request))
            }
            Err(e) => {
                state.set_error(e.to_string());
                (true, vec![])
            }
        },
        Modal::Rename(form) => match form.validated_name() {
            Ok(Some(new_name)) => (
                true,
                call(
                    state,
                    ApiRequest::RenamePlaylist {
                        playlist_id: form.playlist_id,
                        new_name,
                    },
                ),
            ),
            Ok(None) => {
                // Unchanged name: close without a request.
                state.close_modal();
                (true, vec![])
            }
            Err(e) => {
                state.set_error(e.to_string());
                (true, vec![])
            }
        },
    }
}

/// Applies a worker response to the state.
///
/// Clears the in-flight flag, then updates snapshots and follows up with
/// reloads where a mutation changed server data the current view shows.
fn handle_api_response(state: &mut AppState, response: &ApiResponse) -> (bool, Vec<Action>) {
    state.in_flight = false;

    match response {
        ApiResponse::LoggedIn { session } => {
            state.login(session.clone());
            state.set_info(format!("Signed in as {}", state_username(state)));
            (true, vec![])
        }
        ApiResponse::SearchResults { songs } => {
            state.search_results = songs.clone();
            state.searched = true;
            state.selected_song = 0;
            if !state.search_results.is_empty() {
                state.search_focus = SearchFocus::Results;
            }
            (true, vec![])
        }
        ApiResponse::RatingSaved => {
            state.close_modal();
            state.set_info("Rating saved");
            (true, vec![])
        }
        ApiResponse::PlaylistsLoaded { cards } => {
            if let Some((song_id, song_title)) = state.pending_add.take() {
                let playlists = cards.iter().map(|card| card.playlist.clone()).collect();
                state.set_playlists(cards.clone());
                state.open_modal(Modal::AddToPlaylist(AddToPlaylistForm::new(
                    song_id, song_title, playlists,
                )));
            } else {
                state.set_playlists(cards.clone());
            }
            (true, vec![])
        }
        ApiResponse::PlaylistCreated => {
            state.close_modal();
            state.set_info("Playlist created");
            (true, reload_playlists(state))
        }
        ApiResponse::PlaylistRenamed => {
            state.close_modal();
            state.set_info("Playlist renamed");
            (true, reload_playlists(state))
        }
        ApiResponse::PlaylistDeleted => {
            state.set_info("Playlist deleted");
            (true, reload_playlists(state))
        }
        ApiResponse::SongAdded => {
            state.close_modal();
            state.set_info("Song added to playlist");
            if state.view == View::Playlists {
                (true, reload_playlists(state))
            } else {
                (true, vec![])
            }
        }
        ApiResponse::SongRemoved => {
            state.set_info("Song removed");
            (true, reload_playlists(state))
        }
        ApiResponse::Failed { request, message } => {
            tracing::debug!(request = ?request, message = %message, "request failed");
            if *request == RequestKind::LoadPlaylists {
                state.pending_add = None;
            }
            if *request == RequestKind::SearchSongs {
                state.search_results.clear();
                state.searched = true;
            }
            state.set_error(message.clone());
            (true, vec![])
        }
    }
}

/// Emits a gateway request and raises the in-flight flag.
fn call(state: &mut AppState, request: ApiRequest) -> Vec<Action> {
    state.in_flight = true;
    vec![Action::CallApi(request)]
}

/// Requests a fresh playlist load for the signed-in user.
fn reload_playlists(state: &mut AppState) -> Vec<Action> {
    match state.session.clone() {
        Some(session) => call(
            state,
            ApiRequest::LoadPlaylists {
                user_id: session.user_id,
            },
        ),
        None => vec![],
    }
}

fn state_username(state: &AppState) -> String {
    state
        .session
        .as_ref()
        .map(|session| session.username.clone())
        .unwrap_or_default()
}

/// Short name of an event for span fields.
const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::Char(_) => "Char",
        Event::Backspace => "Backspace",
        Event::Tab => "Tab",
        Event::Enter => "Enter",
        Event::Esc => "Esc",
        Event::KeyDown => "KeyDown",
        Event::KeyUp => "KeyUp",
        Event::NextEntry => "NextEntry",
        Event::PrevEntry => "PrevEntry",
        Event::FocusQuery => "FocusQuery",
        Event::OpenRateModal => "OpenRateModal",
        Event::OpenAddModal => "OpenAddModal",
        Event::OpenCreateModal => "OpenCreateModal",
        Event::OpenRenameModal => "OpenRenameModal",
        Event::DeletePlaylist => "DeletePlaylist",
        Event::RemoveSong => "RemoveSong",
        Event::ShowSearch => "ShowSearch",
        Event::ShowPlaylists => "ShowPlaylists",
        Event::Logout => "Logout",
        Event::Quit => "Quit",
        Event::Api(_) => "Api",
    }
}

//! Terminal shim and entry point.
//!
//! This module is the thin integration layer between the Tunedex library and
//! the terminal: it owns the raw-mode terminal, multiplexes key events with
//! API worker responses, maps keys onto library events, and executes the
//! actions the event handler returns.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────┐
//! │   Terminal Event Loop    │
//! │  ┌──────────────────┐    │
//! │  │ AppState (lib)   │    │  ← UI state, event handling
//! │  └──────────────────┘    │
//! │          │ mpsc          │
//! │          ▼               │
//! │  ┌──────────────────┐    │
//! │  │ ApiWorker task   │    │  ← Catalog HTTP calls
//! │  └──────────────────┘    │
//! └──────────────────────────┘
//! ```
//!
//! The worker runs as a separate tokio task; the UI loop never awaits a
//! network call directly, so the interface stays responsive while a request
//! is outstanding.
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+c`: Quit
//!
//! Login view: type a username, `Enter` to sign in.
//!
//! Search view (query focused):
//! - Type to edit the query, `Enter` to search, `Esc` to jump to results
//!
//! Search view (results focused):
//! - `j`/`k` or arrows: navigate
//! - `/`: edit query
//! - `r`: rate the selected song
//! - `a`: add the selected song to a playlist
//! - `p`: playlists view, `l`: log out, `q`: quit
//!
//! Playlists view:
//! - `j`/`k`: select playlist, `J`/`K`: select song within it
//! - `n`: new playlist, `r`: rename, `d`: delete, `x`: remove selected song
//! - `s`: search view, `l`: log out, `q`: quit
//!
//! Modals capture input: `Tab` cycles fields, `Enter` submits, `Esc` cancels.

use std::io::{self, Write};
use std::process::ExitCode;

use crossterm::event::{Event as TermEvent, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{cursor, execute, terminal};
use futures_util::StreamExt;
use tokio::sync::mpsc;

use tunedex::api::CatalogClient;
use tunedex::worker::{ApiRequest, ApiResponse, ApiWorker};
use tunedex::{handle_event, Action, AppState, Config, Event, Modal, SearchFocus, View};

/// Depth of the request/response channels between UI loop and worker.
const CHANNEL_CAPACITY: usize = 16;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("tunedex: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> tunedex::Result<()> {
    let config = Config::load()?;
    tunedex::observability::init_tracing(&config);
    tracing::debug!(server_url = %config.server_url, "starting");

    let client = CatalogClient::new(&config.server_url, config.request_timeout())?;

    let (request_tx, request_rx) = mpsc::channel::<ApiRequest>(CHANNEL_CAPACITY);
    let (response_tx, response_rx) = mpsc::channel::<ApiResponse>(CHANNEL_CAPACITY);
    tokio::spawn(ApiWorker::new(Box::new(client)).run(request_rx, response_tx));

    let mut app = tunedex::initialize(&config);

    terminal::enable_raw_mode()?;
    execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

    let result = event_loop(&mut app, request_tx, response_rx).await;

    execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    result
}

/// Runs the UI loop until the user quits or a channel closes.
///
/// Terminal events and worker responses are multiplexed with `select!`;
/// both paths funnel into [`handle_event`], keeping all state transitions in
/// one place.
async fn event_loop(
    app: &mut AppState,
    requests: mpsc::Sender<ApiRequest>,
    mut responses: mpsc::Receiver<ApiResponse>,
) -> tunedex::Result<()> {
    let mut term_events = EventStream::new();

    render_frame(app)?;

    loop {
        let event = tokio::select! {
            maybe_term = term_events.next() => match maybe_term {
                Some(Ok(TermEvent::Key(key))) if key.kind != KeyEventKind::Release => {
                    match map_key_event(app, &key) {
                        Some(event) => event,
                        None => continue,
                    }
                }
                Some(Ok(TermEvent::Resize(..))) => {
                    render_frame(app)?;
                    continue;
                }
                Some(Ok(_)) => continue,
                Some(Err(e)) => return Err(e.into()),
                None => return Ok(()),
            },
            maybe_response = responses.recv() => match maybe_response {
                Some(response) => Event::Api(response),
                None => {
                    tracing::debug!("worker stopped, exiting");
                    return Ok(());
                }
            },
        };

        match handle_event(app, &event) {
            Ok((should_render, actions)) => {
                for action in actions {
                    match action {
                        Action::CallApi(request) => {
                            if requests.send(request).await.is_err() {
                                tracing::debug!("request channel closed, exiting");
                                return Ok(());
                            }
                        }
                        Action::Quit => return Ok(()),
                    }
                }
                if should_render {
                    render_frame(app)?;
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
            }
        }
    }
}

/// Renders one frame at the current terminal size.
fn render_frame(app: &AppState) -> tunedex::Result<()> {
    let (cols, rows) = terminal::size()?;
    tunedex::ui::render(app, rows as usize, cols as usize);
    io::stdout().flush()?;
    Ok(())
}

/// Maps a key press onto a library event for the current context.
///
/// The mapping depends on what has focus: inside a text field most
/// characters are input, while over a listing they are commands. Returns
/// `None` for keys with no meaning in the current context.
fn map_key_event(app: &AppState, key: &KeyEvent) -> Option<Event> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Event::Quit);
    }

    if let Some(modal) = &app.modal {
        return Some(match key.code {
            KeyCode::Esc => Event::Esc,
            KeyCode::Enter => Event::Enter,
            KeyCode::Tab => Event::Tab,
            KeyCode::Backspace => Event::Backspace,
            KeyCode::Down => Event::KeyDown,
            KeyCode::Up => Event::KeyUp,
            KeyCode::Char(c) => match modal {
                // The picker has no text fields; j/k move its highlight.
                Modal::AddToPlaylist(_) => match c {
                    'j' => Event::KeyDown,
                    'k' => Event::KeyUp,
                    _ => return None,
                },
                _ => Event::Char(c),
            },
            _ => return None,
        });
    }

    match app.view {
        View::Login => Some(match key.code {
            KeyCode::Enter => Event::Enter,
            KeyCode::Backspace => Event::Backspace,
            KeyCode::Char(c) => Event::Char(c),
            _ => return None,
        }),
        View::Search => match app.search_focus {
            SearchFocus::Query => Some(match key.code {
                KeyCode::Enter => Event::Enter,
                KeyCode::Esc => Event::Esc,
                KeyCode::Backspace => Event::Backspace,
                KeyCode::Char(c) => Event::Char(c),
                _ => return None,
            }),
            SearchFocus::Results => Some(match key.code {
                KeyCode::Down | KeyCode::Char('j') => Event::KeyDown,
                KeyCode::Up | KeyCode::Char('k') => Event::KeyUp,
                KeyCode::Char('/') => Event::FocusQuery,
                KeyCode::Char('r') => Event::OpenRateModal,
                KeyCode::Char('a') => Event::OpenAddModal,
                KeyCode::Char('p') => Event::ShowPlaylists,
                KeyCode::Char('l') => Event::Logout,
                KeyCode::Char('q') => Event::Quit,
                _ => return None,
            }),
        },
        View::Playlists => Some(match key.code {
            KeyCode::Down | KeyCode::Char('j') => Event::KeyDown,
            KeyCode::Up | KeyCode::Char('k') => Event::KeyUp,
            KeyCode::Char('J') => Event::NextEntry,
            KeyCode::Char('K') => Event::PrevEntry,
            KeyCode::Char('n') => Event::OpenCreateModal,
            KeyCode::Char('r') => Event::OpenRenameModal,
            KeyCode::Char('d') => Event::DeletePlaylist,
            KeyCode::Char('x') => Event::RemoveSong,
            KeyCode::Char('s') => Event::ShowSearch,
            KeyCode::Char('l') => Event::Logout,
            KeyCode::Char('q') => Event::Quit,
            _ => return None,
        }),
    }
}

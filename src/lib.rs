//! Tunedex: a terminal client for a music cataloging service.
//!
//! Tunedex signs in against a catalog backend, searches its songs, submits
//! star ratings, and manages playlists, all over the backend's REST API. The
//! client holds no authoritative data: every listing on screen is a snapshot
//! of the last fetch, refreshed after each mutating action.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Shim (main.rs)                            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Form logic
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ API Layer     │   │ Worker Layer  │
//! │ (ui/)         │   │ (api/)        │   │ (worker/)     │
//! │ - Rendering   │   │ - REST client │   │ - Async calls │
//! │ - Theming     │   │ - Error model │   │ - Req/resp    │
//! │ - Components  │   │ - Gateway API │   │   protocol    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Catalog models (domain/models)                   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`api`]: HTTP gateway to the catalog backend
//! - [`domain`]: Core domain types (catalog entities, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`worker`]: Background worker for asynchronous API calls
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: Tracing subscriber setup
//!
//! # Control Flow
//!
//! 1. **Startup** (`main.rs`):
//!    - Load configuration (file, then environment overrides)
//!    - Initialize tracing to a log file
//!    - Build the HTTP client and spawn the API worker
//!    - Enter the terminal event loop
//!
//! 2. **User Action**:
//!    - A key press maps to an [`app::Event`]
//!    - [`handle_event`] mutates state and returns actions
//!    - [`app::Action::CallApi`] requests go to the worker channel
//!
//! 3. **Worker Response**:
//!    - The response re-enters as [`app::Event::Api`]
//!    - State snapshots update, a modal closes, or a reload is requested
//!    - The UI re-renders from the new state
//!
//! Every catalog operation is one request-response cycle initiated by a user
//! action; there is no background refresh and no retry logic anywhere.

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event, Modal, SearchFocus, View};
pub use domain::{Result, Session, TunedexError};
pub use ui::Theme;

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Client configuration.
///
/// Loaded from an optional TOML file with environment overrides applied on
/// top. Everything has a sensible default, so the client runs with no
/// configuration at all against a local backend.
///
/// # Example
///
/// ```toml
/// # ~/.config/tunedex/config.toml
/// server_url = "http://music.example.com:5001"
/// request_timeout_secs = 10
/// theme_name = "catppuccin-mocha"
/// log_level = "debug"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the catalog backend.
    pub server_url: String,

    /// Per-request timeout in seconds.
    ///
    /// Applies to every gateway call, so no request can stay pending
    /// indefinitely.
    pub request_timeout_secs: u64,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`. Ignored if
    /// `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Tracing filter directive for the log file.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:5001".to_string(),
            request_timeout_secs: 10,
            theme_name: None,
            theme_file: None,
            log_level: None,
        }
    }
}

impl Config {
    /// Loads the configuration from the default location.
    ///
    /// Reads `config.toml` from the configuration directory when it exists,
    /// otherwise starts from defaults. Environment overrides
    /// (`TUNEDEX_SERVER_URL`, `TUNEDEX_LOG`) are applied last.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the file exists but cannot be read
    /// or parsed. A missing file is not an error.
    pub fn load() -> Result<Self> {
        let path = infrastructure::paths::config_file();
        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };
        config.apply_env();
        Ok(config)
    }

    /// Parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the file cannot be read or does
    /// not parse as TOML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(&path).map_err(|e| {
            TunedexError::Config(format!(
                "failed to read {}: {e}",
                path.as_ref().display()
            ))
        })?;

        toml::from_str(&contents).map_err(|e| {
            TunedexError::Config(format!(
                "failed to parse {}: {e}",
                path.as_ref().display()
            ))
        })
    }

    /// Applies environment variable overrides.
    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("TUNEDEX_SERVER_URL") {
            if !url.is_empty() {
                self.server_url = url;
            }
        }
        if let Ok(level) = std::env::var("TUNEDEX_LOG") {
            if !level.is_empty() {
                self.log_level = Some(level);
            }
        }
    }

    /// Returns the per-request timeout as a [`Duration`].
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Initializes the application state from configuration.
///
/// Resolves the theme (custom file, then built-in name, then default) and
/// builds a fresh [`AppState`] showing the login view.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(server_url = %config.server_url, "initializing tunedex client");

    let theme = resolve_theme(config);
    AppState::new(theme)
}

/// Picks the theme per configuration, falling back to the default on any
/// load failure.
fn resolve_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        match Theme::from_file(theme_file) {
            Ok(theme) => return theme,
            Err(e) => {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme file, using default");
            }
        }
    }

    if let Some(theme_name) = &config.theme_name {
        match Theme::from_name(theme_name) {
            Some(theme) => return theme,
            None => {
                tracing::debug!(theme_name = %theme_name, "unknown theme name, using default");
            }
        }
    }

    Theme::default()
}

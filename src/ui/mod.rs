//! User interface rendering layer with component-based architecture.
//!
//! This module turns view models into ANSI-styled terminal output through
//! composable rendering components, with theme support and query match
//! highlighting.
//!
//! # Architecture
//!
//! The UI layer follows a declarative rendering model:
//!
//! ```text
//! AppState → compute_viewmodel → UiViewModel → render → ANSI output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (sanitization, highlighting)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    BodyView, CardView, EmptyState, EntryView, FieldView, FooterInfo, HeaderInfo, LoginView,
    ModalView, PlaylistsView, SearchView, SongRow, StatusView, UiViewModel,
};

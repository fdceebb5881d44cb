//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic, sitting between the
//! terminal runtime (main.rs) and the gateway/worker layers. It implements
//! the event-driven architecture that powers the interactive UI.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Worker Responses ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`forms`]: Modal form field state, coercion, and presence checks
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: View, focus, and modal state machine types
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod forms;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{Modal, SearchFocus, View};
pub use state::{AppState, StatusKind, StatusLine};

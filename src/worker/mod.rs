//! Background worker performing catalog API calls.
//!
//! This module keeps all network I/O off the UI loop. The application layer
//! sends [`ApiRequest`] messages over a channel; the worker owns the gateway,
//! performs the calls, and sends [`ApiResponse`] events back. The UI stays
//! responsive to other input while a request is outstanding.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types
//! - `handler`: Worker implementation and per-request processing

pub mod handler;
pub mod messages;

pub use handler::ApiWorker;
pub use messages::{ApiRequest, ApiResponse, RequestKind};

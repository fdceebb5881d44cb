//! HTTP gateway to the catalog backend.
//!
//! This module owns everything that crosses the network boundary: the request
//! and reply body types, the transport/application error taxonomy, the
//! [`CatalogGateway`] trait that the rest of the crate programs against, and
//! the [`CatalogClient`] implementation backed by `reqwest`.
//!
//! Every gateway method performs exactly one HTTP request with an explicit
//! timeout and returns either a typed value or an [`ApiError`]. Callers never
//! see raw responses.

pub mod client;
pub mod error;
pub mod gateway;
pub mod types;

pub use client::CatalogClient;
pub use error::{ApiError, Result};
pub use gateway::CatalogGateway;

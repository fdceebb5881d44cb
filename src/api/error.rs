//! Error taxonomy for catalog API calls.

use thiserror::Error;

/// Errors that can occur when talking to the catalog backend.
///
/// The variants split along the line the UI cares about: transport problems
/// (the server could not be reached, or HTTP itself failed) produce a generic
/// connectivity message, while application-level rejections carry the reason
/// the backend supplied and are shown to the user verbatim.
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed below the application layer.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server could not be reached or did not answer in time.
    #[error("Cannot reach the catalog server: {0}")]
    Unreachable(String),

    /// The server answered with a failure status and no usable error body.
    #[error("Catalog server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The server rejected the operation and said why.
    ///
    /// The message is the backend-supplied reason, passed through unchanged
    /// (for example a duplicate playlist membership).
    #[error("{0}")]
    Rejected(String),

    /// A response arrived but did not parse as the expected shape.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// The configured server URL is unusable.
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Returns `true` for application-level rejections carrying a backend
    /// reason, as opposed to connectivity or protocol failures.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

/// Result type for catalog API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

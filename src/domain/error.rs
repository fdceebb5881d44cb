//! Error types for the Tunedex client.
//!
//! This module defines the centralized error type [`TunedexError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for Tunedex client operations.
///
/// This enum consolidates all error conditions that can occur while the client
/// runs, from gateway failures to configuration problems. Most variants wrap
/// underlying errors from external crates using `#[from]` for automatic conversion.
///
/// # Examples
///
/// ```
/// use tunedex::domain::TunedexError;
///
/// fn check_stars(raw: &str) -> Result<u8, TunedexError> {
///     raw.trim()
///         .parse()
///         .map_err(|_| TunedexError::Input(format!("not a whole number: '{raw}'")))
/// }
///
/// assert!(check_stars("4").is_ok());
/// assert!(check_stars("four").is_err());
/// ```
#[derive(Debug, Error)]
pub enum TunedexError {
    /// A catalog API call failed.
    ///
    /// Wraps the gateway error taxonomy, covering both transport failures and
    /// application-level rejections. Automatically converts from
    /// [`crate::api::ApiError`] using the `#[from]` attribute.
    #[error("{0}")]
    Api(#[from] crate::api::ApiError),

    /// User input was missing or malformed.
    ///
    /// Raised before any request is sent, for example when a star rating does
    /// not parse as an integer or a required field is empty. The string holds
    /// the message shown in the status line.
    #[error("{0}")]
    Input(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when the configuration file cannot be read or parsed. The string
    /// describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing or loading failed.
    ///
    /// Occurs when a theme file cannot be read or does not parse as a theme.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Terminal or filesystem I/O failed.
    ///
    /// Wraps errors from standard library I/O operations and the terminal
    /// backend. Automatically converts from `std::io::Error`.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for Tunedex operations.
///
/// This is a type alias for `std::result::Result<T, TunedexError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, TunedexError>;

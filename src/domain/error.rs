//! Error types for the reelsearch plugin.
//!
//! This module defines the centralized error type [`ReelsearchError`] and a
//! [`Result`] alias used throughout the crate. Errors never reach the user
//! directly: the catalog boundary folds them into its uniform failure shape and
//! the plugin shim logs whatever escapes `handle_event`.

use thiserror::Error;

/// The main error type for reelsearch operations.
///
/// # Examples
///
/// ```
/// use reelsearch::ReelsearchError;
///
/// let err = ReelsearchError::Http { status: 503 };
/// assert_eq!(err.to_string(), "Catalog returned HTTP status 503");
/// ```
#[derive(Debug, Error)]
pub enum ReelsearchError {
    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A catalog payload could not be decoded.
    ///
    /// Wraps `serde_json` errors raised while reading search or detail bodies.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The catalog answered with a non-success HTTP status.
    #[error("Catalog returned HTTP status {status}")]
    Http {
        /// Status code reported by the host's web request facility.
        status: u16,
    },

    /// A catalog payload decoded but violates the catalog contract
    /// (for example a non-numeric `totalResults`).
    #[error("Malformed catalog payload: {0}")]
    Payload(String),

    /// A web request completion carried a context map we did not issue.
    #[error("Invalid request context: {0}")]
    Context(String),
}

/// A specialized `Result` type for reelsearch operations.
pub type Result<T> = std::result::Result<T, ReelsearchError>;

//! Error types for the filter entry points.

use thiserror::Error;

/// Errors surfaced when filtering a document.
///
/// Only the string-level entry point can fail; the tree passes handle
/// every input shape as a conditional no-op.
#[derive(Debug, Error)]
pub enum FilterError {
    /// The input could not be parsed into an HTML document.
    #[error("failed to parse HTML: {0}")]
    ParseError(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, FilterError>;

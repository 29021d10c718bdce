//! Error types for marga.
//!
//! Search failures (blocked start, unreachable target, ...) are not errors:
//! they come back as [`PathFailure`](crate::pathfinding::PathFailure) on a
//! result with `success == false`. The types here cover fallible setup only.

use thiserror::Error;

use crate::config::ConfigError;

/// Result type alias
pub type Result<T> = std::result::Result<T, MargaError>;

/// Marga error type
#[derive(Error, Debug)]
pub enum MargaError {
    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Grid input has the wrong size or unknown cells
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

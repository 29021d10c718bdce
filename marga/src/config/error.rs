//! Configuration loading errors.

use thiserror::Error;

/// Config load error
#[derive(Error, Debug)]
pub enum ConfigError {
    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse error
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A value is out of range
    #[error("Config validation error: {0}")]
    Validation(String),
}

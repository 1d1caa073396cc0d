//! Configuration error types.

use thiserror::Error;

/// Errors raised while building component configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable missing
    #[error("Missing environment variable: {0}")]
    MissingVar(&'static str),

    /// Environment variable present but unparseable
    #[error("Invalid value for {var}: {reason}")]
    InvalidVar {
        /// Variable name
        var: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

/// Result type for configuration loading.
pub type Result<T> = std::result::Result<T, ConfigError>;

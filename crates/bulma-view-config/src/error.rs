//! Configuration error types

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading a configuration file
    #[error("IO error reading {path}: {source}")]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// TOML could not be parsed into a configuration
    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration parsed but is not internally consistent
    #[error("Invalid config: {0}")]
    Invalid(String),

    /// A process-wide configuration was already installed
    #[error("A theme configuration is already installed")]
    AlreadyInstalled,
}

/// Specialized Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    /// Create an invalid configuration error
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }
}

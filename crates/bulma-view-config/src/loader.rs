//! Loading theme configuration from TOML

use crate::error::{ConfigError, ConfigResult};
use crate::theme::ThemeConfig;
use std::path::Path;

impl ThemeConfig {
    /// Parse and validate a configuration from a TOML string.
    ///
    /// Missing keys fall back to the built-in defaults.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: ThemeConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML configuration file
    pub fn load_from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Loading theme configuration");
        Self::from_toml_str(&content)
    }
}

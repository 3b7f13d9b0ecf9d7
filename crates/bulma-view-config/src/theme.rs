//! Theme configuration
//!
//! `ThemeConfig` lists the Bulma modifier names components accept and the
//! host features they may rely on. The built-in defaults match Bulma's own
//! color and size modifiers with Font Awesome as the icon family.

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::sync::{LazyLock, OnceLock};

static INSTALLED: OnceLock<ThemeConfig> = OnceLock::new();
static DEFAULT: LazyLock<ThemeConfig> = LazyLock::new(ThemeConfig::default);

/// Read-only configuration consulted while validating and rendering components
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Color modifiers, rendered as `is-<color>`
    pub colors: Vec<String>,
    /// Size modifiers, rendered as `is-<size>`
    pub sizes: Vec<String>,
    /// Icon families an `Icon` may name
    pub icon_families: Vec<String>,
    /// Family used when an icon does not name one
    pub default_icon_family: String,
    /// Render forms with `data-remote="true"`
    pub use_remote_forms: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            colors: [
                "white", "black", "light", "dark", "text", "ghost", "primary", "link", "info",
                "success", "warning", "danger",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            sizes: ["small", "normal", "medium", "large"]
                .into_iter()
                .map(String::from)
                .collect(),
            icon_families: ["fas", "far", "fab"].into_iter().map(String::from).collect(),
            default_icon_family: "fas".to_string(),
            use_remote_forms: false,
        }
    }
}

impl ThemeConfig {
    /// The installed process-wide configuration, or the built-in defaults
    pub fn global() -> &'static ThemeConfig {
        INSTALLED.get().unwrap_or(&DEFAULT)
    }

    /// Validate and install this configuration process-wide.
    ///
    /// Installation happens at most once; a second attempt fails with
    /// [`ConfigError::AlreadyInstalled`] and leaves the first one in place.
    pub fn install(self) -> ConfigResult<()> {
        self.validate()?;
        INSTALLED.set(self).map_err(|_| {
            tracing::warn!("Ignoring second theme configuration install");
            ConfigError::AlreadyInstalled
        })
    }

    /// Check that the configuration is internally consistent
    pub fn validate(&self) -> ConfigResult<()> {
        if self.colors.is_empty() {
            return Err(ConfigError::invalid("colors must not be empty"));
        }
        if self.sizes.is_empty() {
            return Err(ConfigError::invalid("sizes must not be empty"));
        }
        if !self.is_icon_family(&self.default_icon_family) {
            return Err(ConfigError::invalid(format!(
                "default_icon_family `{}` is not one of icon_families",
                self.default_icon_family
            )));
        }
        Ok(())
    }

    /// Whether `name` is a configured color
    pub fn is_color(&self, name: &str) -> bool {
        self.colors.iter().any(|c| c == name)
    }

    /// Whether `name` is a configured size
    pub fn is_size(&self, name: &str) -> bool {
        self.sizes.iter().any(|s| s == name)
    }

    /// Whether `name` is a configured icon family
    pub fn is_icon_family(&self, name: &str) -> bool {
        self.icon_families.iter().any(|f| f == name)
    }
}

//! # Bulma View Configuration
//!
//! Read-only configuration shared by every render: the color and size names
//! components accept, the icon families they can draw from, and host feature
//! flags such as remote forms.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bulma_view_config::ThemeConfig;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ThemeConfig::load_from_file("theme.toml")?;
//!     config.install()?;
//!     assert!(ThemeConfig::global().is_color("primary"));
//!     Ok(())
//! }
//! ```
//!
//! Configuration is installed at most once per process and never mutated
//! afterwards. Code that needs a different configuration passes one
//! explicitly through the render context instead.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod loader;
mod theme;

pub use error::*;
pub use theme::*;

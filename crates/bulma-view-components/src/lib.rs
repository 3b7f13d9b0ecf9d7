//! Bulma-styled view components
//!
//! Every component declares a cached option [`Schema`](bulma_view_core::Schema),
//! validates its options on construction and renders Bulma markup. Colors,
//! sizes and icon families are checked against the process-wide
//! [`ThemeConfig`](bulma_view_config::ThemeConfig).
//!
//! ```
//! use bulma_view_components::{default_registry, Button};
//! use bulma_view_core::{options, render_to_string, Component, RenderContext};
//!
//! let registry = default_registry();
//! let ctx = RenderContext::new().with_registry(&registry);
//! let button = Button::build(options! { "label" => "Save", "color" => "primary" }).unwrap();
//! assert_eq!(
//!     render_to_string(&button, &ctx).unwrap(),
//!     r#"<button class="button is-primary" type="button">Save</button>"#
//! );
//! ```

pub mod button;
pub mod card;
pub mod form;
pub mod icon;
pub mod notification;
pub mod registry;
pub mod table;
pub mod tag;
pub mod theme;

pub use button::{Button, Clickable};
pub use card::Card;
pub use form::{AuthenticityToken, Checkbox, Field, Form, Select, TextInput};
pub use icon::Icon;
pub use notification::Notification;
pub use registry::{default_registry, register_defaults};
pub use table::{render_table, Column, Table};
pub use tag::Tag;

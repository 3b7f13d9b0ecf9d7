//! Form builder: a `<form>` plus Bulma-structured fields

mod builder;
mod field;
mod inputs;
mod token;

pub use builder::Form;
pub use field::Field;
pub use inputs::{Checkbox, Select, TextInput, INPUT_TYPES};
pub use token::AuthenticityToken;

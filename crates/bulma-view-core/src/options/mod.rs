//! Declarative component options: definitions, schemas and validation

mod definition;
mod props;
mod schema;
mod validate;
mod value;

pub use definition::{DefaultFn, DefaultValue, OptionDef, Rule, Shape, ValidatorFn};
pub use props::Props;
pub use schema::{Schema, SchemaBuilder};
pub use validate::validate;
pub use value::{is_truthy, to_sentence, Options};

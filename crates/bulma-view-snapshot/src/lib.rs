//! Snapshot testing for rendered HTML
//!
//! Markup is parsed into a small tree and pretty-printed into a canonical
//! form that ignores quote style, name case and inter-tag whitespace.
//! [`SnapshotMatcher`] compares that canonical form of a rendered
//! component, document or string byte for byte against an expected
//! snapshot, which must itself be written in canonical form, and reports
//! mismatches as a unified diff.
//!
//! ```text
//! Subject -> render -> parse -> normalize --+
//!                                           +--> compare -> Outcome
//! expected ---------------------------------+
//! ```

pub mod diff;
pub mod error;
pub mod matcher;
pub mod normalize;
pub mod parser;

#[cfg(any(test, feature = "test-utils"))]
pub mod strategies;

pub use diff::DiffRenderer;
pub use error::{ParseError, SnapshotError, SnapshotResult};
pub use matcher::{Outcome, SnapshotMatcher, SnapshotSource, Subject};
pub use normalize::{normalize, normalize_document, AUTHENTICITY_TOKEN_PLACEHOLDER};
pub use parser::{Attribute, Document, Element, Node};

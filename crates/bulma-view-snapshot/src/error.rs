//! Snapshot error types

use bulma_view_core::ComponentError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Malformed markup, with the 1-based position it was detected at
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Markup parse error at line {line}, column {column}: {message}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl ParseError {
    /// Build an error for byte `offset` of `source`
    pub(crate) fn at(source: &str, offset: usize, message: impl Into<String>) -> Self {
        let before = &source[..offset.min(source.len())];
        let line = before.matches('\n').count() + 1;
        let column = before
            .rsplit('\n')
            .next()
            .map(|tail| tail.chars().count() + 1)
            .unwrap_or(1);
        Self {
            message: message.into(),
            line,
            column,
        }
    }
}

/// Snapshot matching error type
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The actual markup could not be normalized
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The actual component failed to render
    #[error("Component failed to render: {0}")]
    Render(#[from] ComponentError),

    /// A file-backed expectation could not be read
    #[error("Failed to read snapshot {path}: {source}")]
    Io {
        /// Snapshot file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },
}

/// Specialized Result type for snapshot operations
pub type SnapshotResult<T> = Result<T, SnapshotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_is_one_based() {
        let source = "<ul>\n  <li>x</ul>";
        let err = ParseError::at(source, source.find("</ul>").unwrap(), "mismatched");
        assert_eq!((err.line, err.column), (2, 8));
        assert_eq!(
            err.to_string(),
            "Markup parse error at line 2, column 8: mismatched"
        );
    }

    #[test]
    fn test_position_at_start() {
        let err = ParseError::at("<p", 0, "unterminated tag");
        assert_eq!((err.line, err.column), (1, 1));
    }
}

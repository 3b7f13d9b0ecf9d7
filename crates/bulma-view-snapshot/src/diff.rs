//! Unified diffs between expected and actual snapshots

use similar::{ChangeTag, TextDiff};

/// Renders line diffs with a configurable amount of context
#[derive(Debug, Clone, Copy)]
pub struct DiffRenderer {
    context_lines: usize,
}

impl Default for DiffRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffRenderer {
    /// Three lines of context, like `diff -u`
    pub fn new() -> Self {
        Self { context_lines: 3 }
    }

    pub fn with_context(mut self, lines: usize) -> Self {
        self.context_lines = lines;
        self
    }

    /// Unified diff from `expected` to `actual`; empty when they are equal
    pub fn render(&self, expected: &str, actual: &str) -> String {
        TextDiff::from_lines(expected, actual)
            .unified_diff()
            .context_radius(self.context_lines)
            .header("expected", "actual")
            .to_string()
    }

    /// Number of inserted and deleted lines
    pub fn stats(&self, expected: &str, actual: &str) -> (usize, usize) {
        TextDiff::from_lines(expected, actual)
            .iter_all_changes()
            .fold((0, 0), |(ins, del), change| match change.tag() {
                ChangeTag::Insert => (ins + 1, del),
                ChangeTag::Delete => (ins, del + 1),
                ChangeTag::Equal => (ins, del),
            })
    }
}

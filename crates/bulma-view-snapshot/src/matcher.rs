//! Snapshot matching
//!
//! Compares the normalized form of an actual value byte for byte with an
//! expected snapshot written in canonical form. The actual value can be a
//! component rendered in a context, a parsed document, a markup string, or
//! anything that formats itself with `Display`.

use crate::diff::DiffRenderer;
use crate::error::{SnapshotError, SnapshotResult};
use crate::normalize::{normalize, normalize_document};
use crate::parser::Document;
use bulma_view_core::{render_to_string, Render, RenderContext};
use std::fmt;
use std::path::Path;

/// Supplies an expected snapshot, typically a fixture local to one test
pub trait SnapshotSource {
    fn snapshot(&self) -> String;
}

impl SnapshotSource for str {
    fn snapshot(&self) -> String {
        self.to_string()
    }
}

impl SnapshotSource for String {
    fn snapshot(&self) -> String {
        self.clone()
    }
}

/// The actual value under test
pub enum Subject<'a> {
    /// Rendered in `context` before normalizing
    Component {
        component: &'a dyn Render,
        context: RenderContext<'a>,
    },
    Document(&'a Document),
    Markup(&'a str),
    /// Normalized through its `Display` form, compared verbatim if that is not markup
    Object(&'a dyn fmt::Display),
}

impl<'a> Subject<'a> {
    pub fn component(component: &'a dyn Render, context: RenderContext<'a>) -> Self {
        Self::Component { component, context }
    }

    pub fn object(value: &'a dyn fmt::Display) -> Self {
        Self::Object(value)
    }

    /// Label used in failure messages
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Component { .. } => "component",
            Self::Document(_) => "document",
            Self::Markup(_) => "string",
            Self::Object(_) => "object",
        }
    }

    fn normalized(&self) -> SnapshotResult<String> {
        match self {
            Self::Component { component, context } => {
                let markup = render_to_string(*component, context)?;
                Ok(normalize(&markup)?)
            }
            Self::Document(document) => Ok(normalize_document(document)),
            Self::Markup(markup) => Ok(normalize(markup)?),
            Self::Object(value) => {
                let text = value.to_string();
                match normalize(&text) {
                    Ok(normalized) => Ok(normalized),
                    Err(err) => {
                        tracing::debug!(error = %err, "Comparing object by its plain string form");
                        Ok(text)
                    }
                }
            }
        }
    }
}

impl<'a> From<&'a str> for Subject<'a> {
    fn from(markup: &'a str) -> Self {
        Self::Markup(markup)
    }
}

impl<'a> From<&'a String> for Subject<'a> {
    fn from(markup: &'a String) -> Self {
        Self::Markup(markup)
    }
}

impl<'a> From<&'a Document> for Subject<'a> {
    fn from(document: &'a Document) -> Self {
        Self::Document(document)
    }
}

impl fmt::Debug for Subject<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Component { component, context } => f
                .debug_struct("Component")
                .field("type", &component.type_name())
                .field("context", context)
                .finish(),
            Self::Document(document) => f.debug_tuple("Document").field(document).finish(),
            Self::Markup(markup) => f.debug_tuple("Markup").field(markup).finish(),
            Self::Object(value) => f.debug_tuple("Object").field(&value.to_string()).finish(),
        }
    }
}

/// Result of comparing one subject against one snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    kind: &'static str,
    expected: String,
    actual: String,
}

impl Outcome {
    pub fn matched(&self) -> bool {
        self.expected == self.actual
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Expected snapshot, exactly as supplied
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// Normalized actual value
    pub fn actual(&self) -> &str {
        &self.actual
    }

    pub fn diff(&self) -> String {
        DiffRenderer::new().render(&self.expected, &self.actual)
    }

    pub fn failure_message(&self) -> String {
        let (added, removed) = DiffRenderer::new().stats(&self.expected, &self.actual);
        format!(
            "expected {} to match snapshot (+{added} -{removed} lines):\n\n{}",
            self.kind,
            self.diff()
        )
    }

    pub fn negated_failure_message(&self) -> String {
        format!(
            "expected {} not to match snapshot, but it normalized to:\n\n{}",
            self.kind, self.actual
        )
    }
}

/// Holds an expected snapshot and judges subjects against it
#[derive(Debug, Clone)]
pub struct SnapshotMatcher {
    expected: String,
}

impl SnapshotMatcher {
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> SnapshotResult<Self> {
        let path = path.as_ref();
        let expected = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Loaded snapshot");
        Ok(Self::new(expected))
    }

    pub fn from_source<S: SnapshotSource + ?Sized>(source: &S) -> Self {
        Self::new(source.snapshot())
    }

    /// The snapshot as written; never normalized
    pub fn expected(&self) -> &str {
        &self.expected
    }

    pub fn evaluate(&self, subject: &Subject<'_>) -> SnapshotResult<Outcome> {
        let actual = subject.normalized()?;
        let outcome = Outcome {
            kind: subject.kind(),
            expected: self.expected.clone(),
            actual,
        };
        tracing::debug!(kind = outcome.kind, matched = outcome.matched(), "Evaluated snapshot");
        Ok(outcome)
    }

    pub fn matches(&self, subject: &Subject<'_>) -> SnapshotResult<bool> {
        Ok(self.evaluate(subject)?.matched())
    }

    pub fn does_not_match(&self, subject: &Subject<'_>) -> SnapshotResult<bool> {
        Ok(!self.evaluate(subject)?.matched())
    }
}

/// Assert that a subject matches an expected snapshot, panicking with a diff
///
/// The subject is anything convertible into a [`Subject`]: a markup string,
/// a [`Document`], or an explicitly built `Subject`.
#[macro_export]
macro_rules! assert_snapshot_matches {
    ($subject:expr, $expected:expr $(,)?) => {{
        let matcher = $crate::SnapshotMatcher::new($expected);
        let subject = $crate::Subject::from($subject);
        match matcher.evaluate(&subject) {
            Ok(outcome) if outcome.matched() => {}
            Ok(outcome) => panic!("{}", outcome.failure_message()),
            Err(err) => panic!("snapshot could not be evaluated: {}", err),
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulma_view_core::{Markup, Result};
    use std::io::Write;
    use tempfile::NamedTempFile;

    struct Items(&'static [&'static str]);

    impl Render for Items {
        fn render(&self, _ctx: &RenderContext<'_>) -> Result<Markup> {
            Ok(maud::html! {
                ul { @for item in self.0 { li { (item) } } }
            })
        }
    }

    struct Broken;

    impl Render for Broken {
        fn render(&self, _ctx: &RenderContext<'_>) -> Result<Markup> {
            Err(bulma_view_core::ComponentError::render("no data"))
        }
    }

    const ITEMS_SNAPSHOT: &str = "<ul>\n  <li>Ichi</li>\n\n  <li>Ni</li>\n</ul>\n";

    #[test]
    fn component_matches_hand_written_snapshot() {
        let items = Items(&["Ichi", "Ni"]);
        let subject = Subject::component(&items, RenderContext::new());
        let matcher = SnapshotMatcher::new(ITEMS_SNAPSHOT);
        assert!(matcher.matches(&subject).unwrap());
        assert!(!matcher.does_not_match(&subject).unwrap());
    }

    #[test]
    fn mismatch_reports_kind_and_diff() {
        let items = Items(&["Ichi", "San"]);
        let subject = Subject::component(&items, RenderContext::new());
        let outcome = SnapshotMatcher::new(ITEMS_SNAPSHOT).evaluate(&subject).unwrap();

        assert!(!outcome.matched());
        let message = outcome.failure_message();
        assert!(message.starts_with("expected component to match snapshot (+1 -1 lines)"));
        assert!(message.contains("-  <li>Ni</li>\n+  <li>San</li>"));
    }

    #[test]
    fn negated_message_shows_actual() {
        let outcome = SnapshotMatcher::new("<p>x</p>\n")
            .evaluate(&Subject::from("<P>x</P>"))
            .unwrap();
        assert!(outcome.matched());
        assert_eq!(
            outcome.negated_failure_message(),
            "expected string not to match snapshot, but it normalized to:\n\n<p>x</p>\n"
        );
    }

    #[test]
    fn object_falls_back_to_plain_string() {
        let count = 42;
        let subject = Subject::object(&count);
        assert_eq!(subject.kind(), "object");
        assert!(SnapshotMatcher::new("42\n").matches(&subject).unwrap());

        let unbalanced = "<p>open";
        let subject = Subject::object(&unbalanced);
        let outcome = SnapshotMatcher::new("<p>x</p>\n").evaluate(&subject).unwrap();
        assert_eq!(outcome.actual(), "<p>open");
        assert!(SnapshotMatcher::new("<p>open").matches(&subject).unwrap());
    }

    #[test]
    fn expectation_is_compared_verbatim() {
        let br = Subject::from("<br>");
        assert!(!SnapshotMatcher::new("<br/>").matches(&br).unwrap());
        assert!(!SnapshotMatcher::new("<br>").matches(&br).unwrap());
        assert!(SnapshotMatcher::new("<br>\n").matches(&br).unwrap());

        let outcome = SnapshotMatcher::new("   <P>x</P>   ")
            .evaluate(&Subject::from("<p>x</p>"))
            .unwrap();
        assert!(!outcome.matched());
        assert_eq!(outcome.expected(), "   <P>x</P>   ");
    }

    #[test]
    fn unparseable_expectation_is_not_an_error() {
        let matcher = SnapshotMatcher::new("<p>open");
        assert!(matcher.does_not_match(&Subject::from("<p>open</p>")).unwrap());
    }

    #[test]
    fn malformed_string_subject_is_an_error() {
        let err = SnapshotMatcher::new("<p>x</p>")
            .matches(&Subject::from("<p>open"))
            .unwrap_err();
        assert!(matches!(err, SnapshotError::Parse(_)));
    }

    #[test]
    fn render_failure_propagates() {
        let subject = Subject::component(&Broken, RenderContext::new());
        let err = SnapshotMatcher::new("").matches(&subject).unwrap_err();
        assert!(matches!(err, SnapshotError::Render(_)));
    }

    #[test]
    fn document_subject() {
        let document = Document::parse("<br>").unwrap();
        let subject = Subject::from(&document);
        assert_eq!(subject.kind(), "document");
        assert!(SnapshotMatcher::new("<br>\n").matches(&subject).unwrap());
    }

    #[test]
    fn snapshot_from_file_and_source() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{ITEMS_SNAPSHOT}").unwrap();
        let from_file = SnapshotMatcher::from_file(file.path()).unwrap();
        let from_source = SnapshotMatcher::from_source(ITEMS_SNAPSHOT);
        assert_eq!(from_file.expected(), from_source.expected());

        let err = SnapshotMatcher::from_file(file.path().with_extension("missing")).unwrap_err();
        assert!(matches!(err, SnapshotError::Io { .. }));
    }

    #[test]
    fn macro_accepts_strings() {
        crate::assert_snapshot_matches!("<ul><li>Ichi</li><li>Ni</li></ul>", ITEMS_SNAPSHOT);
    }

    #[test]
    #[should_panic(expected = "expected string to match snapshot")]
    fn macro_panics_with_failure_message() {
        crate::assert_snapshot_matches!("<p>a</p>", "<p>b</p>");
    }
}

//! Canonical pretty-printing of HTML
//!
//! Two markup strings that differ only in insignificant whitespace, quote
//! style or name case normalize to the same text, so snapshots can be
//! written by hand and compared byte for byte. Normalizing already
//! normalized output is a no-op.

use crate::error::ParseError;
use crate::parser::{Document, Element, Node};
use regex::Regex;
use std::sync::LazyLock;

/// What every hidden CSRF token input normalizes to
pub const AUTHENTICITY_TOKEN_PLACEHOLDER: &str =
    r#"<input type="hidden" name="authenticity_token" value="[token]" autocomplete="off">"#;

const INDENT: &str = "  ";

/// A newline followed only by blanks at the very end of a text run
static CLOSING_INDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n([ \t]*)\z").expect("closing indent regex"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex"));

static DOCTYPE_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i)doctype\b").expect("doctype regex"));

/// Parse `markup` and return its canonical form
pub fn normalize(markup: &str) -> Result<String, ParseError> {
    let markup = markup.replace("\r\n", "\n");
    let document = Document::parse(&markup)?;
    Ok(normalize_document(&document))
}

/// Canonical form of an already parsed document
pub fn normalize_document(document: &Document) -> String {
    let mut out = render_nodes(&document.children).join("\n\n");
    out.push('\n');
    out
}

fn render_nodes<'a>(nodes: impl IntoIterator<Item = &'a Node>) -> Vec<String> {
    nodes.into_iter().filter_map(render_node).collect()
}

fn render_node(node: &Node) -> Option<String> {
    match node {
        Node::Text(text) => loose_text(text),
        Node::Comment(text) => Some(render_comment(text)),
        Node::Doctype(text) => {
            let text = collapse_whitespace(text);
            Some(format!("<!{}>", DOCTYPE_KEYWORD.replace(&text, "DOCTYPE")))
        }
        Node::Element(element) => Some(render_element(element)),
    }
}

fn render_comment(text: &str) -> String {
    let text = collapse_whitespace(text);
    if text.is_empty() {
        "<!---->".to_string()
    } else {
        format!("<!-- {text} -->")
    }
}

fn render_element(element: &Element) -> String {
    if is_authenticity_token(element) {
        return AUTHENTICITY_TOKEN_PLACEHOLDER.to_string();
    }

    let open = open_tag(element);
    let name = &element.name;
    let significant: Vec<&Node> = element.children.iter().filter(|n| !n.is_blank()).collect();

    if significant.is_empty() {
        return if element.is_void() {
            open
        } else {
            format!("{open}</{name}>")
        };
    }

    let text_only = significant.iter().all(|n| matches!(n, Node::Text(_)));
    if !text_only {
        let body = indent(&render_nodes(significant).join("\n\n"));
        return format!("{open}\n{body}\n</{name}>");
    }

    let text: String = significant
        .iter()
        .filter_map(|n| match n {
            Node::Text(text) => Some(text.as_str()),
            _ => None,
        })
        .collect();

    if text.contains('\n') {
        format!("{open}\n{}\n</{name}>", realign(&text))
    } else {
        format!("{open}{text}</{name}>")
    }
}

fn open_tag(element: &Element) -> String {
    let mut tag = format!("<{}", element.name);
    for attribute in &element.attributes {
        tag.push(' ');
        tag.push_str(&attribute.name);
        if let Some(value) = &attribute.value {
            tag.push_str("=\"");
            // Open tags stay on one line so nesting never re-indents a value
            tag.push_str(&value.replace('"', "&quot;").replace('\n', "&#10;"));
            tag.push('"');
        }
    }
    tag.push('>');
    tag
}

fn is_authenticity_token(element: &Element) -> bool {
    element.name == "input"
        && element.attr("name") == Some("authenticity_token")
        && element
            .attr("type")
            .is_some_and(|kind| kind.eq_ignore_ascii_case("hidden"))
}

/// Text sitting beside elements: one trimmed line per source line
fn loose_text(text: &str) -> Option<String> {
    let lines: Vec<&str> = text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    (!lines.is_empty()).then(|| lines.join("\n"))
}

/// Re-indent multi-line text that is an element's only content
fn realign(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let (Some(first), Some(last)) = (
        lines.iter().position(|line| !is_blank(line)),
        lines.iter().rposition(|line| !is_blank(line)),
    ) else {
        return String::new();
    };
    let body = &lines[first..=last];

    let realigned: Vec<String> = if let Some(captures) = CLOSING_INDENT.captures(text) {
        let closing = captures.get(1).map_or("", |m| m.as_str());
        body.iter()
            .map(|&line| {
                if is_blank(line) {
                    String::new()
                } else {
                    line.strip_prefix(closing).unwrap_or(line).to_string()
                }
            })
            .collect()
    } else {
        let common = body
            .iter()
            .filter(|line| !is_blank(line))
            .map(|line| leading_blanks(line))
            .min()
            .unwrap_or(0);
        body.iter()
            .map(|&line| {
                if is_blank(line) {
                    String::new()
                } else {
                    format!("{INDENT}{}", &line[common..])
                }
            })
            .collect()
    };
    realigned.join("\n")
}

fn indent(block: &str) -> String {
    block
        .split('\n')
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{INDENT}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn leading_blanks(line: &str) -> usize {
    line.bytes().take_while(|b| matches!(b, b' ' | b'\t')).count()
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

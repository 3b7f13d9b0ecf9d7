//! Order-preserving HTML fragment parser
//!
//! Produces a small document tree for the normalizer. Attribute order is
//! kept exactly as written, tag and attribute names are lowercased, and the
//! contents of raw-text elements are kept verbatim as a single text node.

use crate::error::ParseError;
use std::str::FromStr;

/// Elements that never have content or a closing tag
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Elements whose contents are not parsed as markup
pub const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "textarea", "pre"];

pub fn is_void(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    /// `None` for a bare attribute such as `disabled`
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// First value of the named attribute; bare attributes read as `""`
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_deref().unwrap_or(""))
    }

    pub fn is_void(&self) -> bool {
        is_void(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
    Doctype(String),
}

impl Node {
    /// Text consisting only of whitespace
    pub fn is_blank(&self) -> bool {
        matches!(self, Node::Text(text) if text.trim().is_empty())
    }
}

/// A parsed markup fragment: zero or more top-level nodes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub children: Vec<Node>,
}

impl Document {
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        Parser::new(source).parse()
    }
}

impl FromStr for Document {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// An element that has been opened but not yet closed
struct Open {
    element: Element,
    start: usize,
}

struct Parser<'a> {
    source: &'a str,
    bytes: &'a [u8],
    pos: usize,
    stack: Vec<Open>,
    root: Vec<Node>,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            bytes: source.as_bytes(),
            pos: 0,
            stack: Vec::new(),
            root: Vec::new(),
        }
    }

    fn parse(mut self) -> Result<Document, ParseError> {
        while self.pos < self.bytes.len() {
            if self.starts_with("<!--") {
                self.parse_comment()?;
            } else if self.starts_with("<!") {
                self.parse_declaration()?;
            } else if self.starts_with("</") {
                self.parse_end_tag()?;
            } else if self.at_start_tag() {
                self.parse_start_tag()?;
            } else {
                self.parse_text();
            }
        }

        if let Some(open) = self.stack.pop() {
            return Err(self.error_at(
                open.start,
                format!("unclosed element <{}>", open.element.name),
            ));
        }
        Ok(Document {
            children: self.root,
        })
    }

    fn error_at(&self, offset: usize, message: impl Into<String>) -> ParseError {
        ParseError::at(self.source, offset, message)
    }

    fn starts_with(&self, prefix: &str) -> bool {
        self.source[self.pos..].starts_with(prefix)
    }

    fn at_start_tag(&self) -> bool {
        self.bytes[self.pos] == b'<'
            && self
                .bytes
                .get(self.pos + 1)
                .is_some_and(u8::is_ascii_alphabetic)
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn append(&mut self, node: Node) {
        let siblings = match self.stack.last_mut() {
            Some(open) => &mut open.element.children,
            None => &mut self.root,
        };
        // Adjacent text runs merge into one node
        if let (Node::Text(text), Some(Node::Text(previous))) = (&node, siblings.last_mut()) {
            previous.push_str(text);
            return;
        }
        siblings.push(node);
    }

    fn parse_text(&mut self) {
        let start = self.pos;
        self.pos += 1;
        while self.pos < self.bytes.len() {
            if self.bytes[self.pos] == b'<'
                && (self.at_start_tag() || self.starts_with("</") || self.starts_with("<!"))
            {
                break;
            }
            self.pos += 1;
        }
        let text = self.source[start..self.pos].to_string();
        self.append(Node::Text(text));
    }

    fn parse_comment(&mut self) -> Result<(), ParseError> {
        let start = self.pos;
        let body = start + "<!--".len();
        let end = self.source[body..]
            .find("-->")
            .map(|i| body + i)
            .ok_or_else(|| self.error_at(start, "unterminated comment"))?;
        let text = self.source[body..end].to_string();
        self.pos = end + "-->".len();
        self.append(Node::Comment(text));
        Ok(())
    }

    fn parse_declaration(&mut self) -> Result<(), ParseError> {
        let start = self.pos;
        let body = start + "<!".len();
        let end = self.source[body..]
            .find('>')
            .map(|i| body + i)
            .ok_or_else(|| self.error_at(start, "unterminated declaration"))?;
        let text = self.source[body..end].trim().to_string();
        self.pos = end + 1;
        self.append(Node::Doctype(text));
        Ok(())
    }

    fn parse_name(&mut self) -> String {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b':' | b'.'))
        {
            self.pos += 1;
        }
        self.source[start..self.pos].to_ascii_lowercase()
    }

    fn parse_end_tag(&mut self) -> Result<(), ParseError> {
        let start = self.pos;
        self.pos += "</".len();
        let name = self.parse_name();
        self.skip_whitespace();
        if self.peek() != Some(b'>') {
            return Err(self.error_at(start, "unterminated end tag"));
        }
        self.pos += 1;

        let expected = self.stack.last().map(|open| open.element.name.clone());
        match expected {
            Some(expected) if expected == name => {
                if let Some(open) = self.stack.pop() {
                    self.append(Node::Element(open.element));
                }
                Ok(())
            }
            Some(expected) => Err(self.error_at(
                start,
                format!("mismatched end tag </{name}>, expected </{expected}>"),
            )),
            None => Err(self.error_at(start, format!("unexpected end tag </{name}>"))),
        }
    }

    fn parse_start_tag(&mut self) -> Result<(), ParseError> {
        let start = self.pos;
        self.pos += 1;
        let mut element = Element::new(self.parse_name());

        let self_closing = loop {
            self.skip_whitespace();
            match self.peek() {
                None => return Err(self.error_at(start, format!("unterminated tag <{}", element.name))),
                Some(b'>') => {
                    self.pos += 1;
                    break false;
                }
                Some(b'/') if self.bytes.get(self.pos + 1) == Some(&b'>') => {
                    self.pos += 2;
                    break true;
                }
                Some(b'/') => self.pos += 1,
                Some(_) => {
                    let attribute = self.parse_attribute()?;
                    element.attributes.push(attribute);
                }
            }
        };

        if self_closing || element.is_void() {
            self.append(Node::Element(element));
        } else if RAW_TEXT_ELEMENTS.contains(&element.name.as_str()) {
            self.parse_raw_text(element, start)?;
        } else {
            self.stack.push(Open { element, start });
        }
        Ok(())
    }

    fn parse_attribute(&mut self) -> Result<Attribute, ParseError> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|b| !b.is_ascii_whitespace() && !matches!(b, b'=' | b'>' | b'/'))
        {
            self.pos += 1;
        }
        if self.pos == start {
            return Err(self.error_at(start, "malformed attribute"));
        }
        let name = self.source[start..self.pos].to_ascii_lowercase();

        let before_equals = self.pos;
        self.skip_whitespace();
        if self.peek() != Some(b'=') {
            self.pos = before_equals;
            return Ok(Attribute { name, value: None });
        }
        self.pos += 1;
        self.skip_whitespace();

        let value = match self.peek() {
            Some(quote @ (b'"' | b'\'')) => {
                let value_start = self.pos + 1;
                let end = self.bytes[value_start..]
                    .iter()
                    .position(|&b| b == quote)
                    .map(|i| value_start + i)
                    .ok_or_else(|| {
                        self.error_at(self.pos, format!("unterminated value for attribute {name}"))
                    })?;
                self.pos = end + 1;
                self.source[value_start..end].to_string()
            }
            Some(_) => {
                let value_start = self.pos;
                while self
                    .peek()
                    .is_some_and(|b| !b.is_ascii_whitespace() && b != b'>')
                {
                    self.pos += 1;
                }
                self.source[value_start..self.pos].to_string()
            }
            None => return Err(self.error_at(start, format!("unterminated value for attribute {name}"))),
        };
        Ok(Attribute {
            name,
            value: Some(value),
        })
    }

    fn parse_raw_text(&mut self, mut element: Element, start: usize) -> Result<(), ParseError> {
        let closing = format!("</{}", element.name);
        // ASCII lowercasing keeps byte offsets intact
        let haystack = self.source[self.pos..].to_ascii_lowercase();
        let end = haystack
            .find(&closing)
            .map(|i| self.pos + i)
            .ok_or_else(|| self.error_at(start, format!("unclosed element <{}>", element.name)))?;

        let text = &self.source[self.pos..end];
        if !text.is_empty() {
            element.children.push(Node::Text(text.to_string()));
        }
        self.pos = end + closing.len();
        self.skip_whitespace();
        if self.peek() != Some(b'>') {
            return Err(self.error_at(end, "unterminated end tag"));
        }
        self.pos += 1;
        self.append(Node::Element(element));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Vec<Node> {
        Document::parse(source).unwrap().children
    }

    fn element(node: &Node) -> &Element {
        match node {
            Node::Element(element) => element,
            other => panic!("expected element, got {other:?}"),
        }
    }

    #[test]
    fn attributes_keep_their_order_and_forms() {
        let nodes = parse(r#"<INPUT Type="text" name='q' value=plain disabled>"#);
        let input = element(&nodes[0]);
        assert_eq!(input.name, "input");
        let attrs: Vec<(&str, Option<&str>)> = input
            .attributes
            .iter()
            .map(|a| (a.name.as_str(), a.value.as_deref()))
            .collect();
        assert_eq!(
            attrs,
            [
                ("type", Some("text")),
                ("name", Some("q")),
                ("value", Some("plain")),
                ("disabled", None),
            ]
        );
        assert_eq!(input.attr("disabled"), Some(""));
    }

    #[test]
    fn nested_elements_and_text() {
        let nodes = parse("<ul><li>Ichi</li><li>Ni</li></ul>");
        let ul = element(&nodes[0]);
        assert_eq!(ul.children.len(), 2);
        assert_eq!(
            element(&ul.children[1]).children,
            [Node::Text("Ni".to_string())]
        );
    }

    #[test]
    fn void_and_self_closing_elements_do_not_nest() {
        let nodes = parse("<p><br><img src=a.png/><span/>x</p>");
        let p = element(&nodes[0]);
        let names: Vec<&str> = p
            .children
            .iter()
            .filter_map(|n| match n {
                Node::Element(e) => Some(e.name.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(names, ["br", "img", "span"]);
        assert_eq!(element(&p.children[1]).attr("src"), Some("a.png/"));
    }

    #[test]
    fn raw_text_is_not_parsed() {
        let nodes = parse("<script>if (a < b) { x('</p>') }</SCRIPT>");
        let script = element(&nodes[0]);
        assert_eq!(
            script.children,
            [Node::Text("if (a < b) { x('</p>') }".to_string())]
        );
    }

    #[test]
    fn comments_and_doctype() {
        let nodes = parse("<!DOCTYPE html><!-- note --><p>a < b</p>");
        assert_eq!(nodes[0], Node::Doctype("DOCTYPE html".to_string()));
        assert_eq!(nodes[1], Node::Comment(" note ".to_string()));
        assert_eq!(
            element(&nodes[2]).children,
            [Node::Text("a < b".to_string())]
        );
    }

    #[test]
    fn unclosed_element_points_at_its_start() {
        let err = Document::parse("<div>\n  <p>text\n</div>").unwrap_err();
        assert_eq!((err.line, err.column), (3, 1));
        assert!(err.message.contains("mismatched end tag </div>"));

        let err = Document::parse("<div>\n  <span>x</span>").unwrap_err();
        assert_eq!((err.line, err.column), (1, 1));
        assert_eq!(err.message, "unclosed element <div>");
    }

    #[test]
    fn stray_end_tag() {
        let err = Document::parse("<p>x</p></p>").unwrap_err();
        assert_eq!(err.message, "unexpected end tag </p>");
        assert_eq!(err.column, 9);
    }

    #[test]
    fn unterminated_constructs() {
        assert_eq!(
            Document::parse("<div class=\"x").unwrap_err().message,
            "unterminated value for attribute class"
        );
        assert_eq!(
            Document::parse("<!-- open").unwrap_err().message,
            "unterminated comment"
        );
        assert_eq!(
            Document::parse("<p class=x").unwrap_err().message,
            "unterminated tag <p"
        );
    }
}

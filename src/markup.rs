//! A small HTML node tree used for every template the page builds.
//!
//! Templates are assembled as [`Tag`] values and serialised with escaping, so record fields
//! taken from the content document can never open or close elements. Fragments that are
//! already HTML (the output of a [`Format`](crate::formats::Format)) travel as [`Node::Raw`].

use std::fmt::Write;

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

#[derive(Debug, Clone, PartialEq, Eq)]
/// One node of a markup tree.
pub enum Node {
    /// An element with attributes and children.
    Element(Tag),
    /// Text content, escaped on output.
    Text(String),
    /// Pre-rendered HTML, emitted verbatim.
    Raw(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// An element under construction.
pub struct Tag {
    /// Element name, e.g. `article`.
    pub name: String,
    /// Element id, if any.
    pub id: Option<String>,
    /// Class list in insertion order.
    pub classes: Vec<String>,
    /// Other attributes in insertion order.
    pub attributes: Vec<(String, String)>,
    /// Child nodes.
    pub children: Vec<Node>,
}

impl Tag {
    #[must_use]
    /// Starts an element with no attributes or children.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            id: None,
            classes: Vec::new(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    /// Sets the element id.
    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    #[must_use]
    /// Adds every whitespace-separated class in `classes`.
    pub fn class(mut self, classes: &str) -> Self {
        self.classes
            .extend(classes.split_whitespace().map(str::to_string));
        self
    }

    #[must_use]
    /// Adds an attribute.
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }

    #[must_use]
    /// Appends a child node.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    #[must_use]
    /// Appends escaped text.
    pub fn text(self, text: &str) -> Self {
        self.child(Node::Text(text.to_string()))
    }
}

impl From<Tag> for Node {
    fn from(tag: Tag) -> Self {
        Node::Element(tag)
    }
}

impl Node {
    #[must_use]
    /// Serialises this node and its subtree.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    /// Appends the serialised node to `out`.
    pub fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&escape_text(text)),
            Node::Raw(html) => out.push_str(html),
            Node::Element(tag) => {
                write_open_tag(
                    out,
                    &tag.name,
                    tag.id.as_deref(),
                    &tag.classes,
                    tag.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str())),
                );
                if is_void(&tag.name) {
                    return;
                }
                for child in &tag.children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", tag.name);
            }
        }
    }
}

#[must_use]
/// Whether `name` is a void element.
pub fn is_void(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

/// Writes `<name id=".." class=".." k="v"...>`.
pub fn write_open_tag<'a>(
    out: &mut String,
    name: &str,
    id: Option<&str>,
    classes: &[String],
    attributes: impl Iterator<Item = (&'a str, &'a str)>,
) {
    out.push('<');
    out.push_str(name);
    if let Some(id) = id {
        let _ = write!(out, " id=\"{}\"", escape_attr(id));
    }
    if !classes.is_empty() {
        let _ = write!(out, " class=\"{}\"", escape_attr(&classes.join(" ")));
    }
    for (key, value) in attributes {
        let _ = write!(out, " {key}=\"{}\"", escape_attr(value));
    }
    out.push('>');
}

#[must_use]
/// Escapes text content.
pub fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[must_use]
/// Escapes an attribute value for use inside double quotes.
pub fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

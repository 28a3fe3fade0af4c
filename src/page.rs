//! In-memory page that the renderer writes into and the controllers react to.
//!
//! The page is an arena of elements addressed by [`ElementId`]. Replacing an element's children
//! detaches the old subtree rather than freeing it, so ids handed out earlier stay valid to
//! inspect but no longer match queries. Only attached elements are found by [`Page::by_id`] and
//! [`Page::select`].

use crate::markup::{escape_text, is_void, write_open_tag, Node, Tag};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Handle to an element in a [`Page`].
pub struct ElementId(usize);

#[derive(Debug, Clone)]
enum Child {
    Element(ElementId),
    Text(String),
    Raw(String),
}

#[derive(Debug, Clone)]
/// A live element: tag, id, classes, attributes and form value.
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    value: String,
    children: Vec<Child>,
    parent: Option<ElementId>,
    attached: bool,
}

impl Element {
    fn from_tag(tag: &Tag, parent: Option<ElementId>) -> Self {
        let value = tag
            .attributes
            .iter()
            .find(|(k, _)| k == "value")
            .map(|(_, v)| v.clone())
            .unwrap_or_default();
        Self {
            tag: tag.name.clone(),
            id: tag.id.clone(),
            classes: tag.classes.clone(),
            attributes: tag.attributes.clone(),
            value,
            children: Vec::new(),
            parent,
            attached: true,
        }
    }

    #[must_use]
    /// Element name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    /// Element id attribute.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[must_use]
    /// Whether the class list contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Adds `class` unless already present.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Removes every occurrence of `class`.
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Adds or removes `class` according to `on`.
    pub fn set_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    #[must_use]
    /// The class attribute as it would be serialised.
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }

    #[must_use]
    /// Attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    /// `data-*` attribute value by key (without the `data-` prefix).
    pub fn data(&self, key: &str) -> Option<&str> {
        self.attr(&format!("data-{key}"))
    }

    /// Sets an attribute, keeping its position if it already exists.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        if let Some(slot) = self.attributes.iter_mut().find(|(k, _)| k == name) {
            slot.1 = value.to_string();
        } else {
            self.attributes.push((name.to_string(), value.to_string()));
        }
    }

    /// Removes an attribute.
    pub fn remove_attr(&mut self, name: &str) {
        self.attributes.retain(|(k, _)| k != name);
    }

    #[must_use]
    /// Whether the attribute is present.
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    #[must_use]
    /// Current form value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the form value.
    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    #[must_use]
    /// Whether the element is still part of the document tree.
    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

#[derive(Debug, Clone)]
/// The document tree.
pub struct Page {
    elements: Vec<Element>,
    root: ElementId,
    scrolled_to: Option<ElementId>,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    #[must_use]
    /// Empty document with an `html` root.
    pub fn new() -> Self {
        Self::from_markup(&Tag::new("html"))
    }

    #[must_use]
    /// Builds a document whose root is `root`.
    pub fn from_markup(root: &Tag) -> Self {
        let mut page = Self {
            elements: vec![Element::from_tag(root, None)],
            root: ElementId(0),
            scrolled_to: None,
        };
        let top = page.root;
        for child in &root.children {
            let built = page.build(child, top);
            page.elements[top.0].children.push(built);
        }
        page
    }

    fn build(&mut self, node: &Node, parent: ElementId) -> Child {
        match node {
            Node::Text(text) => Child::Text(text.clone()),
            Node::Raw(html) => Child::Raw(html.clone()),
            Node::Element(tag) => {
                let id = ElementId(self.elements.len());
                self.elements.push(Element::from_tag(tag, Some(parent)));
                let children = tag
                    .children
                    .iter()
                    .map(|child| self.build(child, id))
                    .collect();
                self.elements[id.0].children = children;
                Child::Element(id)
            }
        }
    }

    #[must_use]
    /// The document root (`<html>`).
    pub fn root(&self) -> ElementId {
        self.root
    }

    #[must_use]
    /// Borrows an element.
    pub fn get(&self, id: ElementId) -> &Element {
        &self.elements[id.0]
    }

    /// Mutably borrows an element.
    pub fn get_mut(&mut self, id: ElementId) -> &mut Element {
        &mut self.elements[id.0]
    }

    #[must_use]
    /// Parent of an element, if attached below another.
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.get(id).parent
    }

    #[must_use]
    /// Attached descendants of `scope` in document order, excluding `scope` itself.
    pub fn descendants(&self, scope: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        self.collect_descendants(scope, &mut out);
        out
    }

    fn collect_descendants(&self, scope: ElementId, out: &mut Vec<ElementId>) {
        for child in &self.get(scope).children {
            if let Child::Element(id) = child {
                out.push(*id);
                self.collect_descendants(*id, out);
            }
        }
    }

    #[must_use]
    /// First attached element with the given id attribute.
    pub fn by_id(&self, id: &str) -> Option<ElementId> {
        std::iter::once(self.root)
            .chain(self.descendants(self.root))
            .find(|el| self.get(*el).id() == Some(id))
    }

    #[must_use]
    /// Attached descendants of `scope` that carry every class in `classes`.
    pub fn select(&self, scope: ElementId, classes: &[&str]) -> Vec<ElementId> {
        self.descendants(scope)
            .into_iter()
            .filter(|el| {
                let element = self.get(*el);
                classes.iter().all(|c| element.has_class(c))
            })
            .collect()
    }

    #[must_use]
    /// [`Page::select`] over the whole document.
    pub fn select_all(&self, classes: &[&str]) -> Vec<ElementId> {
        self.select(self.root, classes)
    }

    #[must_use]
    /// Attached descendants of `scope` with the given tag name.
    pub fn select_tag(&self, scope: ElementId, tag: &str) -> Vec<ElementId> {
        self.descendants(scope)
            .into_iter()
            .filter(|el| self.get(*el).tag() == tag)
            .collect()
    }

    fn detach(&mut self, child: &Child) {
        if let Child::Element(id) = child {
            self.elements[id.0].attached = false;
            self.elements[id.0].parent = None;
            let grandchildren = self.elements[id.0].children.clone();
            for grandchild in &grandchildren {
                self.detach(grandchild);
            }
        }
    }

    /// Replaces all children of `id` in one operation.
    ///
    /// Returns the ids of the new top-level elements in order.
    pub fn replace_children(&mut self, id: ElementId, nodes: &[Node]) -> Vec<ElementId> {
        let old = std::mem::take(&mut self.elements[id.0].children);
        for child in &old {
            self.detach(child);
        }
        let children: Vec<Child> = nodes.iter().map(|node| self.build(node, id)).collect();
        let created = children
            .iter()
            .filter_map(|child| match child {
                Child::Element(el) => Some(*el),
                _ => None,
            })
            .collect();
        self.elements[id.0].children = children;
        created
    }

    /// Replaces the content of `id` with a pre-rendered HTML fragment.
    pub fn set_inner_html(&mut self, id: ElementId, html: &str) {
        self.replace_children(id, &[Node::Raw(html.to_string())]);
    }

    /// Replaces the content of `id` with plain text.
    pub fn set_text(&mut self, id: ElementId, text: &str) {
        self.replace_children(id, &[Node::Text(text.to_string())]);
    }

    /// Inserts `tag` directly after `anchor` under the same parent.
    ///
    /// Returns `None` when `anchor` has no parent.
    pub fn insert_after(&mut self, anchor: ElementId, tag: &Tag) -> Option<ElementId> {
        let parent = self.parent(anchor)?;
        let position = self.elements[parent.0]
            .children
            .iter()
            .position(|c| matches!(c, Child::Element(el) if *el == anchor))?;
        let built = self.build(&Node::Element(tag.clone()), parent);
        let Child::Element(created) = &built else {
            return None;
        };
        let created = *created;
        self.elements[parent.0].children.insert(position + 1, built);
        Some(created)
    }

    /// Detaches an element and its subtree from the document.
    pub fn remove(&mut self, id: ElementId) {
        if let Some(parent) = self.parent(id) {
            self.elements[parent.0]
                .children
                .retain(|c| !matches!(c, Child::Element(el) if *el == id));
        }
        self.detach(&Child::Element(id));
    }

    #[must_use]
    /// The element immediately following `id` among its siblings, skipping text.
    pub fn next_element_sibling(&self, id: ElementId) -> Option<ElementId> {
        let parent = self.parent(id)?;
        self.get(parent)
            .children
            .iter()
            .filter_map(|c| match c {
                Child::Element(el) => Some(*el),
                _ => None,
            })
            .skip_while(|el| *el != id)
            .nth(1)
    }

    /// Records that the viewport was brought to `id`.
    pub fn scroll_into_view(&mut self, id: ElementId) {
        self.scrolled_to = Some(id);
    }

    #[must_use]
    /// The element most recently scrolled into view.
    pub fn scrolled_to(&self) -> Option<ElementId> {
        self.scrolled_to
    }

    #[must_use]
    /// Concatenated text of the subtree; raw fragments are included verbatim.
    pub fn text_content(&self, id: ElementId) -> String {
        let mut out = String::new();
        for child in &self.get(id).children {
            match child {
                Child::Text(text) | Child::Raw(text) => out.push_str(text),
                Child::Element(el) => out.push_str(&self.text_content(*el)),
            }
        }
        out
    }

    #[must_use]
    /// Serialised children of `id`.
    pub fn inner_html(&self, id: ElementId) -> String {
        let mut out = String::new();
        for child in &self.get(id).children {
            self.write_child(child, &mut out);
        }
        out
    }

    #[must_use]
    /// Serialised element including its own tag.
    pub fn outer_html(&self, id: ElementId) -> String {
        let mut out = String::new();
        self.write_element(id, &mut out);
        out
    }

    #[must_use]
    /// The whole document with a doctype.
    pub fn to_html(&self) -> String {
        format!("<!DOCTYPE html>\n{}\n", self.outer_html(self.root))
    }

    fn write_child(&self, child: &Child, out: &mut String) {
        match child {
            Child::Text(text) => out.push_str(&escape_text(text)),
            Child::Raw(html) => out.push_str(html),
            Child::Element(el) => self.write_element(*el, out),
        }
    }

    fn write_element(&self, id: ElementId, out: &mut String) {
        let element = self.get(id);
        write_open_tag(
            out,
            &element.tag,
            element.id(),
            &element.classes,
            element
                .attributes
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str())),
        );
        if is_void(&element.tag) {
            return;
        }
        for child in &element.children {
            self.write_child(child, out);
        }
        out.push_str("</");
        out.push_str(&element.tag);
        out.push('>');
    }
}

#[cfg(test)]
#[path = "tests/page.rs"]
mod tests;

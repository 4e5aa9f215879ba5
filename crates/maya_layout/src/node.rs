//! Markup node tree
//!
//! Every component renders to a [`Node`]: either an element with classes,
//! inline styles, attributes and children, or a run of text. Elements may
//! also carry a Taffy style so the tree can be laid out with
//! [`LayoutTree`](crate::tree::LayoutTree).
//!
//! # Example
//!
//! ```rust
//! use maya_layout::node::div;
//!
//! let node = div()
//!     .class("maya-header")
//!     .slot("title")
//!     .child("Hello")
//!     .into_node();
//!
//! assert_eq!(
//!     node.to_html(),
//!     r#"<div class="maya-header" data-slot="title">Hello</div>"#
//! );
//! ```

use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use taffy::Style;

/// Attribute naming the molecule slot an element contains
pub const SLOT_ATTR: &str = "data-slot";

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    pub tag: String,
    pub classes: Vec<String>,
    pub styles: IndexMap<String, String>,
    pub attrs: IndexMap<String, String>,
    pub layout: Option<Style>,
    pub children: Vec<Node>,
}

/// Create an empty `<div>`
pub fn div() -> Element {
    Element::new("div")
}

/// Create a text node
pub fn text(content: impl Into<String>) -> Node {
    Node::Text(content.into())
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Append a class. Empty names are skipped.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !class.is_empty() && !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    pub fn class_opt(self, class: Option<impl Into<String>>) -> Self {
        match class {
            Some(class) => self.class(class),
            None => self,
        }
    }

    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.insert(property.into(), value.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Mark this element as the container of a molecule slot
    pub fn slot(self, name: &str) -> Self {
        self.attr(SLOT_ATTR, name)
    }

    pub fn layout(mut self, style: Style) -> Self {
        self.layout = Some(style);
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a child only when there is one
    pub fn child_opt(self, child: Option<impl Into<Node>>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn into_node(self) -> Node {
        Node::Element(self)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn slot_name(&self) -> Option<&str> {
        self.attrs.get(SLOT_ATTR).map(String::as_str)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(content: &str) -> Self {
        Node::Text(content.to_string())
    }
}

impl From<String> for Node {
    fn from(content: String) -> Self {
        Node::Text(content)
    }
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(element) => &element.children,
            Node::Text(_) => &[],
        }
    }

    /// All elements in document order, this node included
    pub fn elements(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        collect_elements(self, &mut out);
        out
    }

    /// Slot names of every slot container, in document order
    pub fn slots(&self) -> Vec<&str> {
        self.elements()
            .into_iter()
            .filter_map(Element::slot_name)
            .collect()
    }

    pub fn find_slot(&self, name: &str) -> Option<&Element> {
        self.elements()
            .into_iter()
            .find(|element| element.slot_name() == Some(name))
    }

    pub fn count_slot(&self, name: &str) -> usize {
        self.slots().into_iter().filter(|slot| *slot == name).count()
    }

    pub fn find_class(&self, class: &str) -> Option<&Element> {
        self.elements()
            .into_iter()
            .find(|element| element.has_class(class))
    }

    /// Concatenated text of this node and its descendants
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(content) => content.clone(),
            Node::Element(element) => element.children.iter().map(Node::text_content).collect(),
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_html(self, &mut out);
        out
    }
}

impl Element {
    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_html())
    }
}

fn collect_elements<'a>(node: &'a Node, out: &mut Vec<&'a Element>) {
    if let Node::Element(element) = node {
        out.push(element);
        for child in &element.children {
            collect_elements(child, out);
        }
    }
}

fn write_html(node: &Node, out: &mut String) {
    match node {
        Node::Text(content) => out.push_str(&html_escape::encode_text(content)),
        Node::Element(element) => {
            out.push('<');
            out.push_str(&element.tag);

            if !element.classes.is_empty() {
                let classes = element.classes.join(" ");
                push_attr(out, "class", &classes);
            }
            if !element.styles.is_empty() {
                let style = element
                    .styles
                    .iter()
                    .map(|(property, value)| format!("{property}: {value}"))
                    .collect::<Vec<_>>()
                    .join("; ");
                push_attr(out, "style", &style);
            }
            for (name, value) in &element.attrs {
                push_attr(out, name, value);
            }

            out.push('>');
            for child in &element.children {
                write_html(child, out);
            }
            out.push_str("</");
            out.push_str(&element.tag);
            out.push('>');
        }
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&html_escape::encode_double_quoted_attribute(value));
    out.push('"');
}

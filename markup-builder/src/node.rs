//! Node model
//!
//!     A document fragment is a tree of [`Node`] values. The set of node kinds is closed:
//!     an element with attributes and ordered children, or a text leaf. Trees own their
//!     children outright and carry no parent links, so composing, cloning and comparing
//!     are plain value operations.
//!
//!     Attributes live in a [`BTreeMap`] keyed by [`AttributeName`]. The map gives us the
//!     two properties the model needs at once: insertion order does not take part in
//!     equality, and iteration order is the canonical (ascending name) order used when
//!     rendering.
//!
//!     An attribute value is an `Option<String>`: `None` is an attribute that is present
//!     without a value (`<input disabled>`), which is not the same thing as `Some("")`.

use crate::compose::IntoNodes;
use std::borrow::{Borrow, Cow};
use std::collections::BTreeMap;
use std::fmt;

/// Name of an attribute.
///
/// Backed by a `Cow` so the well known names in [`crate::catalog`] can be constants.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttributeName(Cow<'static, str>);

impl AttributeName {
    pub const fn from_static(name: &'static str) -> Self {
        AttributeName(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<String>) -> Self {
        AttributeName(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for AttributeName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AttributeName {
    fn from(name: &str) -> Self {
        AttributeName::new(name)
    }
}

impl From<String> for AttributeName {
    fn from(name: String) -> Self {
        AttributeName(Cow::Owned(name))
    }
}

impl From<&AttributeName> for AttributeName {
    fn from(name: &AttributeName) -> Self {
        name.clone()
    }
}

impl fmt::Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `None` means "present without a value".
pub type AttributeValue = Option<String>;

pub type Attributes = BTreeMap<AttributeName, AttributeValue>;

/// One unit of a document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// Discriminant of a [`Node`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Element,
    Text,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Element => write!(f, "element"),
            NodeKind::Text => write!(f, "text"),
        }
    }
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Element(_) => NodeKind::Element,
            Node::Text(_) => NodeKind::Text,
        }
    }

    /// Structural equality against an optional node.
    ///
    /// Comparing against `None` is always false, even for an empty text node.
    pub fn is_equal<'a>(&self, other: impl Into<Option<&'a Node>>) -> bool {
        match other.into() {
            Some(other) => self == other,
            None => false,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            Node::Element(_) => None,
        }
    }

    /// Short human readable coordinates for logs and errors, e.g. `element <div>`.
    pub fn describe(&self) -> String {
        match self {
            Node::Element(element) => element.describe(),
            Node::Text(text) => format!("text ({} bytes)", text.len()),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<&String> for Node {
    fn from(text: &String) -> Self {
        Node::Text(text.clone())
    }
}

impl From<Cow<'_, str>> for Node {
    fn from(text: Cow<'_, str>) -> Self {
        Node::Text(text.into_owned())
    }
}

/// A named node with attributes and ordered children.
///
/// Builder methods take `self` by value and hand back the updated element, so a value
/// the caller cloned earlier is never affected by later modifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Attributes,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_parts(name, Attributes::new(), Vec::new())
    }

    pub fn from_parts(name: impl Into<String>, attributes: Attributes, children: Vec<Node>) -> Self {
        Element {
            name: name.into(),
            attributes,
            children,
        }
    }

    /// Set an attribute with a value, replacing any previous entry.
    pub fn attr(self, name: impl Into<AttributeName>, value: impl Into<String>) -> Self {
        self.set_attr(name, Some(value.into()))
    }

    /// Set an attribute that is present without a value.
    pub fn bare_attr(self, name: impl Into<AttributeName>) -> Self {
        self.set_attr(name, None)
    }

    pub fn set_attr(mut self, name: impl Into<AttributeName>, value: AttributeValue) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    pub fn remove_attr(mut self, name: &str) -> Self {
        self.attributes.remove(name);
        self
    }

    /// Apply an arbitrary edit to the attribute map.
    pub fn with_attributes(mut self, edit: impl FnOnce(&mut Attributes)) -> Self {
        edit(&mut self.attributes);
        self
    }

    /// `None` when the attribute is absent, `Some(None)` when it is present without value.
    pub fn attribute(&self, name: &str) -> Option<Option<&str>> {
        self.attributes.get(name).map(|value| value.as_deref())
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Append the nodes produced by a composition expression.
    pub fn child(mut self, nodes: impl IntoNodes) -> Self {
        nodes.append_to(&mut self.children);
        self
    }

    /// Append the nodes produced by a closure.
    pub fn children_with<N: IntoNodes>(self, build: impl FnOnce() -> N) -> Self {
        self.child(build())
    }

    /// Append the nodes produced by a fallible closure, propagating its error unchanged.
    pub fn try_children<N, E>(self, build: impl FnOnce() -> Result<N, E>) -> Result<Self, E>
    where
        N: IntoNodes,
    {
        Ok(self.child(build()?))
    }

    pub fn describe(&self) -> String {
        format!("element <{}>", self.name)
    }
}

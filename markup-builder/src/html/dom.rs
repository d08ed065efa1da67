//! Bridge between the node model and the engine's `RcDom` tree.
//!
//! [`Node::to_rcdom`] builds a detached engine tree from the model, for handing a built
//! tree to html5ever based tooling (its serializer, tree walkers). [`from_handle`] walks an
//! engine tree back into the model and is what the importer runs on. The engine stores
//! attribute values as plain strings, so a valueless attribute crosses the bridge as an
//! empty value and comes back as `None`.

use crate::fragment::ImportOptions;
use crate::node::{AttributeName, Attributes, Element, Node};
use html5ever::{ns, Attribute, LocalName, QualName};
use markup5ever_rcdom::{Handle, Node as DomNode, NodeData};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::trace;

impl Node {
    /// Convert this node into a detached `markup5ever_rcdom` tree.
    ///
    /// Attributes are created in name order; a valueless attribute becomes an empty value.
    pub fn to_rcdom(&self) -> Handle {
        to_handle(self)
    }
}

fn to_handle(node: &Node) -> Handle {
    match node {
        Node::Element(element) => {
            let handle = create_element(&element.name, &element.attributes);
            for child in &element.children {
                append(&handle, to_handle(child));
            }
            handle
        }
        Node::Text(text) => create_text(text),
    }
}

/// Convert an engine node into a model node.
///
/// Returns `None` for node kinds the model does not represent (comments, doctypes,
/// processing instructions, documents) and for blank text when the options drop it.
pub fn from_handle(handle: &Handle, options: &ImportOptions) -> Option<Node> {
    match &handle.data {
        NodeData::Element {
            name,
            attrs,
            template_contents,
            ..
        } => {
            let attributes = attrs.borrow().iter().map(import_attribute).collect();
            let mut children = children_of(handle, options);
            if let Some(contents) = template_contents.borrow().as_ref() {
                children.extend(children_of(contents, options));
            }
            Some(Node::Element(Element::from_parts(
                name.local.to_string(),
                attributes,
                children,
            )))
        }
        NodeData::Text { contents } => {
            let text = contents.borrow();
            if !options.keep_blank_text && is_blank(&text) {
                trace!(bytes = text.len(), "dropping blank text node");
                return None;
            }
            Some(Node::Text(String::from(&**text)))
        }
        NodeData::Comment { .. } => {
            trace!("skipping comment");
            None
        }
        NodeData::Doctype { .. } => {
            trace!("skipping doctype");
            None
        }
        NodeData::ProcessingInstruction { .. } => {
            trace!("skipping processing instruction");
            None
        }
        NodeData::Document => None,
    }
}

/// Convert every child of an engine node, in order.
pub fn children_of(handle: &Handle, options: &ImportOptions) -> Vec<Node> {
    handle
        .children
        .borrow()
        .iter()
        .filter_map(|child| from_handle(child, options))
        .collect()
}

/// Local name of an element handle, `None` for any other node kind.
pub fn element_name(handle: &Handle) -> Option<&LocalName> {
    match &handle.data {
        NodeData::Element { name, .. } => Some(&name.local),
        _ => None,
    }
}

fn import_attribute(attribute: &Attribute) -> (AttributeName, Option<String>) {
    let local = &*attribute.name.local;
    let name = match &attribute.name.prefix {
        Some(prefix) => format!("{}:{local}", &**prefix),
        None => local.to_string(),
    };
    let value = if attribute.value.is_empty() {
        None
    } else {
        Some(String::from(&*attribute.value))
    };
    (AttributeName::from(name), value)
}

fn is_blank(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii_whitespace())
}

fn append(parent: &Handle, child: Handle) {
    child.parent.set(Some(Rc::downgrade(parent)));
    parent.children.borrow_mut().push(child);
}

/// Create an HTML element with attributes
fn create_element(tag: &str, attributes: &Attributes) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attrs = attributes
        .iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name.as_str())),
            value: value.as_deref().unwrap_or_default().into(),
        })
        .collect();

    Rc::new(DomNode {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attrs),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

/// Create a text node
fn create_text(text: &str) -> Handle {
    Rc::new(DomNode {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.into()),
        },
    })
}

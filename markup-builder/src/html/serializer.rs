//! HTML rendering (node model → HTML text)
//!
//! Deterministic by construction: attributes come out of the `BTreeMap` in name order,
//! children in sequence order, and nothing is added between siblings.

use crate::error::{MarkupError, Result};
use crate::html::{is_raw_text_element, is_void_element};
use crate::node::{Element, Node};
use tracing::{debug, error, warn};

impl Node {
    /// Render this node to HTML.
    ///
    /// # Panics
    ///
    /// Panics when the tree holds an element or attribute name that cannot be written
    /// as markup (see [`Node::try_render_html`]). Trees built from imported markup or
    /// from ordinary tag names never hit this.
    pub fn render_html(&self) -> String {
        match self.try_render_html() {
            Ok(html) => html,
            Err(err) => {
                error!(node = %self.describe(), error = %err, "tree cannot be rendered");
                panic!("internal invariant violated: {err}");
            }
        }
    }

    /// Render this node to HTML, reporting unwritable names as [`MarkupError::Invariant`].
    pub fn try_render_html(&self) -> Result<String> {
        let mut output = String::new();
        write_node(self, false, &mut output)?;
        let rendered = output.trim();
        debug!(node = %self.describe(), bytes = rendered.len(), "rendered html");
        Ok(rendered.to_string())
    }
}

impl Element {
    pub fn render_html(&self) -> String {
        match self.try_render_html() {
            Ok(html) => html,
            Err(err) => {
                error!(node = %self.describe(), error = %err, "tree cannot be rendered");
                panic!("internal invariant violated: {err}");
            }
        }
    }

    pub fn try_render_html(&self) -> Result<String> {
        let mut output = String::new();
        write_element(self, &mut output)?;
        Ok(output.trim().to_string())
    }
}

/// Render a sequence of nodes, joined by `separator`.
pub fn render_nodes(nodes: &[Node], separator: &str) -> String {
    nodes
        .iter()
        .map(Node::render_html)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Fallible variant of [`render_nodes`].
pub fn try_render_nodes(nodes: &[Node], separator: &str) -> Result<String> {
    let rendered = nodes
        .iter()
        .map(Node::try_render_html)
        .collect::<Result<Vec<_>>>()?;
    Ok(rendered.join(separator))
}

fn write_node(node: &Node, raw_text_parent: bool, output: &mut String) -> Result<()> {
    match node {
        Node::Element(element) => write_element(element, output),
        Node::Text(text) => {
            if raw_text_parent {
                output.push_str(text);
            } else {
                write_escaped(text, false, output);
            }
            Ok(())
        }
    }
}

fn write_element(element: &Element, output: &mut String) -> Result<()> {
    check_element_name(element)?;

    output.push('<');
    output.push_str(&element.name);
    for (name, value) in &element.attributes {
        check_attribute_name(element, name.as_str())?;
        output.push(' ');
        output.push_str(name.as_str());
        if let Some(value) = value {
            output.push_str("=\"");
            write_escaped(value, true, output);
            output.push('"');
        }
    }
    output.push('>');

    if is_void_element(&element.name) {
        if !element.children.is_empty() {
            warn!(
                node = %element.describe(),
                children = element.children.len(),
                "void element children are not rendered"
            );
        }
        return Ok(());
    }

    let raw_text = is_raw_text_element(&element.name);
    for child in &element.children {
        write_node(child, raw_text, output)?;
    }

    output.push_str("</");
    output.push_str(&element.name);
    output.push('>');
    Ok(())
}

/// Characters that end a tag or attribute name in the tokenizer.
fn is_name_terminator(c: char) -> bool {
    c.is_ascii_whitespace() || matches!(c, '/' | '>')
}

fn check_element_name(element: &Element) -> Result<()> {
    let reason = if element.name.is_empty() {
        "empty element name"
    } else if !element.name.starts_with(|c: char| c.is_ascii_alphabetic()) {
        "element name does not start with an ASCII letter"
    } else if element.name.contains(is_name_terminator) {
        "element name contains whitespace, '/' or '>'"
    } else {
        return Ok(());
    };
    Err(MarkupError::Invariant {
        node: element.describe(),
        reason: reason.to_string(),
    })
}

fn check_attribute_name(element: &Element, name: &str) -> Result<()> {
    let unwritable = |c: char| is_name_terminator(c) || matches!(c, '=' | '"' | '\'');
    if name.is_empty() || name.contains(unwritable) {
        return Err(MarkupError::Invariant {
            node: element.describe(),
            reason: format!("attribute name {name:?} cannot be written as markup"),
        });
    }
    Ok(())
}

fn write_escaped(text: &str, attr_mode: bool, output: &mut String) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '\u{00A0}' => output.push_str("&nbsp;"),
            '"' if attr_mode => output.push_str("&quot;"),
            '<' if !attr_mode => output.push_str("&lt;"),
            '>' if !attr_mode => output.push_str("&gt;"),
            c => output.push(c),
        }
    }
}

//! HTML import (HTML text → node model)
//!
//! Pipeline: bytes → UTF-8 text → html5ever → RcDom → node model.
//!
//! The engine always synthesizes `html`, `head` and `body`, so a bare snippet such as
//! `<p>hello</p>` ends up inside `body`. Content the engine hoists into `head`
//! (`<meta>`, `<link>`, a leading `<script>`...) is only reachable with
//! [`ImportScope::Root`].

use crate::error::{MarkupError, Result};
use crate::fragment::{ImportOptions, ImportScope};
use crate::html::dom::{children_of, element_name, from_handle};
use crate::node::Node;
use html5ever::tendril::TendrilSink;
use html5ever::{local_name, parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, RcDom};
use tracing::debug;

/// Parse `bytes` as UTF-8 HTML and extract the nodes selected by `options.scope`.
///
/// The engine tree is owned by this call and dropped before returning, whichever way
/// the call ends.
pub fn import(bytes: &[u8], options: &ImportOptions) -> Result<Vec<Node>> {
    let source = std::str::from_utf8(bytes).map_err(|e| {
        MarkupError::InvalidMarkup(format!("input is not UTF-8 text: {e}"))
    })?;

    let dom = parse_document(RcDom::default(), ParseOpts::default()).one(source);

    let nodes = match options.scope {
        ImportScope::Body => body_nodes(&dom, options),
        ImportScope::Root => root_nodes(&dom, options)?,
    };

    debug!(
        scope = ?options.scope,
        bytes = bytes.len(),
        nodes = nodes.len(),
        "imported html"
    );
    Ok(nodes)
}

fn root_element(dom: &RcDom) -> Option<Handle> {
    dom.document
        .children
        .borrow()
        .iter()
        .find(|child| element_name(child).is_some())
        .cloned()
}

fn root_nodes(dom: &RcDom, options: &ImportOptions) -> Result<Vec<Node>> {
    let root = root_element(dom).ok_or(MarkupError::MissingRoot)?;
    Ok(from_handle(&root, options).into_iter().collect())
}

fn body_nodes(dom: &RcDom, options: &ImportOptions) -> Vec<Node> {
    let Some(root) = root_element(dom) else {
        return Vec::new();
    };
    let body = root
        .children
        .borrow()
        .iter()
        .find(|child| element_name(child) == Some(&local_name!("body")))
        .cloned();
    match body {
        Some(body) => children_of(&body, options),
        None => Vec::new(),
    }
}

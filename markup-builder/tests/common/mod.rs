//! Shared helpers for the integration tests.

use markup_builder::{Element, Node};

/// Merge runs of adjacent text nodes, the way the HTML parser does.
pub fn merge_adjacent_text(nodes: Vec<Node>) -> Vec<Node> {
    let mut merged: Vec<Node> = Vec::with_capacity(nodes.len());
    for node in nodes {
        if let Node::Text(next) = &node {
            if let Some(Node::Text(previous)) = merged.last_mut() {
                previous.push_str(next);
                continue;
            }
        }
        merged.push(node);
    }
    merged
}

/// Import `source` and expect exactly one element back.
pub fn single_element(source: &str) -> Element {
    let nodes = markup_builder::parse(source).expect("source to import");
    assert_eq!(nodes.len(), 1, "expected one node, got {nodes:?}");
    match nodes.into_iter().next() {
        Some(Node::Element(element)) => element,
        other => panic!("expected an element, got {other:?}"),
    }
}

#[test]
fn test_merge_adjacent_text() {
    let merged = merge_adjacent_text(vec![
        Node::text("a"),
        Node::text("b"),
        Node::from(Element::new("br")),
        Node::text("c"),
    ]);
    assert_eq!(
        merged,
        vec![
            Node::text("ab"),
            Node::from(Element::new("br")),
            Node::text("c"),
        ]
    );
}

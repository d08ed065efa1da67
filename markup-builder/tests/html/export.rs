//! Rendering tests: canonical output for built trees.

use insta::assert_snapshot;
use markup_builder::{nodes, render_nodes, Element, MarkupError, Node};

#[test]
fn test_element_with_sorted_attributes() {
    let element = Element::new("a")
        .attr("href", "/x")
        .attr("class", "link")
        .bare_attr("download")
        .child("go");
    assert_snapshot!(element.render_html(), @r#"<a class="link" download href="/x">go</a>"#);
}

#[test]
fn test_insertion_order_does_not_matter() {
    let forward = Element::new("div").attr("a", "1").attr("b", "2").attr("c", "3");
    let backward = Element::new("div").attr("c", "3").attr("b", "2").attr("a", "1");
    assert_eq!(forward, backward);
    assert_eq!(forward.render_html(), backward.render_html());
}

#[test]
fn test_rendering_is_stable() {
    let tree = Node::from(Element::division(nodes![
        Element::new("h1").attr("id", "t").child("Title"),
        "text & more",
        Element::new("input").bare_attr("checked").attr("name", "x"),
    ]));
    let first = tree.render_html();
    for _ in 0..10 {
        assert_eq!(tree.render_html(), first);
    }
    assert_snapshot!(
        first,
        @r#"<div><h1 id="t">Title</h1>text &amp; more<input checked name="x"></div>"#
    );
}

#[test]
fn test_text_node_renders_escaped() {
    assert_snapshot!(Node::text("1 < 2 & 3 > 2").render_html(), @"1 &lt; 2 &amp; 3 &gt; 2");
}

#[test]
fn test_style_and_script_bodies_are_raw() {
    let head = Element::new("head").child((
        Element::new("style").child("p > a { color: red }"),
        Element::javascript("if (a < b) { run(); }"),
    ));
    assert_snapshot!(
        head.render_html(),
        @r#"<head><style>p > a { color: red }</style><script type="application/javascript">if (a < b) { run(); }</script></head>"#
    );
}

#[test]
fn test_empty_and_void_elements() {
    assert_snapshot!(Element::new("div").render_html(), @"<div></div>");
    assert_snapshot!(Element::new("hr").render_html(), @"<hr>");
    assert_snapshot!(Element::new("custom-tag").render_html(), @"<custom-tag></custom-tag>");
}

#[test]
fn test_render_sequence_with_separator() {
    let sequence = nodes![Element::paragraph("a"), Element::paragraph("b")];
    assert_snapshot!(render_nodes(&sequence, "\n"), @r"
    <p>a</p>
    <p>b</p>
    ");
}

#[test]
fn test_unwritable_name_reports_invariant() {
    let tree = Node::from(Element::division(Element::new("a b")));
    match tree.try_render_html() {
        Err(MarkupError::Invariant { node, reason }) => {
            assert_eq!(node, "element <a b>");
            assert!(reason.contains("whitespace"));
        }
        other => panic!("expected an invariant error, got {other:?}"),
    }
}

//! Import tests: markup in, node model out.

use crate::common::single_element;
use insta::assert_snapshot;
use markup_builder::{
    Element, Encoding, Fragment, ImportOptions, ImportScope, MarkupError, Node,
};

#[test]
fn test_attributes_reimport_and_render_exactly() {
    let source = r#"<div a="1" b="2" c="3" d></div>"#;
    let element = single_element(source);
    assert_eq!(
        element,
        Element::new("div")
            .attr("a", "1")
            .attr("b", "2")
            .attr("c", "3")
            .bare_attr("d")
    );
    assert_eq!(element.render_html(), source);
}

#[test]
fn test_unsorted_attributes_render_sorted() {
    let element = single_element(r#"<span z="1" m="2" a="3"></span>"#);
    assert_snapshot!(element.render_html(), @r#"<span a="3" m="2" z="1"></span>"#);
}

#[test]
fn test_escaped_text_survives_a_round_trip() {
    let text = "<script>&\"'";
    let rendered = Node::text(text).render_html();
    assert_snapshot!(rendered, @r#"&lt;script&gt;&amp;"'"#);

    let nodes = markup_builder::parse(&rendered).unwrap();
    assert_eq!(nodes, vec![Node::text(text)]);
}

#[test]
fn test_entities_are_decoded() {
    let element = single_element(r#"<p title="a &amp; &quot;b&quot;">x&nbsp;&lt;y&gt;</p>"#);
    assert_eq!(element.attribute("title"), Some(Some(r#"a & "b""#)));
    assert_eq!(element.children, vec![Node::text("x\u{00A0}<y>")]);
    assert_snapshot!(
        element.render_html(),
        @r#"<p title="a &amp; &quot;b&quot;">x&nbsp;&lt;y&gt;</p>"#
    );
}

#[test]
fn test_malformed_markup_recovers() {
    let nodes = markup_builder::parse("<div><p>one<p>two</div><b>bold").unwrap();
    let rendered = markup_builder::render_nodes(&nodes, "");
    assert_snapshot!(rendered, @"<div><p>one</p><p>two</p></div><b>bold</b>");
}

#[test]
fn test_body_scope_skips_head_content() {
    let source = "<html><head><title>T</title></head><body><main>m</main></body></html>";
    let fragment = Fragment::parse(source).unwrap();
    assert_eq!(fragment.nodes(), &[Node::from(Element::new("main").child("m"))]);

    let options = ImportOptions::new(ImportScope::Root);
    let root = Fragment::import(source.as_bytes(), Encoding::Utf8, &options).unwrap();
    assert_snapshot!(
        root.render_html(""),
        @"<html><head><title>T</title></head><body><main>m</main></body></html>"
    );
}

#[test]
fn test_keep_blank_text_option() {
    let source = b"<div> <span>a</span> </div>";
    let dropped = Fragment::from_bytes(source, Encoding::Utf8).unwrap();
    let div = dropped.nodes()[0].as_element().unwrap();
    assert_eq!(div.children.len(), 1);

    let options = ImportOptions::default().with_blank_text(true);
    let kept = Fragment::import(source, Encoding::Utf8, &options).unwrap();
    let div = kept.nodes()[0].as_element().unwrap();
    assert_eq!(div.children.len(), 3);
    assert_eq!(div.children[0], Node::text(" "));
}

#[test]
fn test_unsupported_encoding_is_rejected_before_parsing() {
    let err = Fragment::from_bytes(b"<p>x</p>", Encoding::Latin1).unwrap_err();
    assert_eq!(err, MarkupError::UnsupportedEncoding("ISO-8859-1".to_string()));
    assert!(err.is_usage_error());
}

#[test]
fn test_invalid_bytes_are_invalid_markup() {
    let err = Fragment::from_bytes(&[b'<', b'p', b'>', 0xff, 0xfe], Encoding::Utf8).unwrap_err();
    assert!(err.is_invalid_markup());
    assert!(!err.is_usage_error());
}

#[test]
fn test_root_scope_on_empty_input_still_has_root() {
    let options = ImportOptions::new(ImportScope::Root);
    let root = Fragment::import(b"", Encoding::Utf8, &options).unwrap();
    assert_eq!(root.len(), 1);
    assert_snapshot!(root.render_html(""), @"<html><head></head><body></body></html>");
}

#[test]
fn test_template_contents_are_imported() {
    let element = single_element("<div><template><li>item</li></template></div>");
    let template = element.children[0].as_element().unwrap();
    assert_eq!(template.name, "template");
    assert_eq!(
        template.children,
        vec![Node::from(Element::new("li").child("item"))]
    );
}

//! Imported fragments inside compositions.

use insta::assert_snapshot;
use markup_builder::{nodes, try_nodes, Element, Encoding, Fragment, MarkupError, Node};

#[test]
fn test_raw_html_is_spliced() -> Result<(), MarkupError> {
    let element = Element::division(Fragment::parse("<p>hello</p>")?);
    assert_snapshot!(element.render_html(), @"<div><p>hello</p></div>");
    Ok(())
}

#[test]
fn test_fragment_splices_all_nodes_in_place() -> Result<(), MarkupError> {
    let fragment = Fragment::parse("<b>one</b> and <i>two</i>")?;
    assert_eq!(fragment.len(), 3);

    let element = Element::new("p").child(nodes!["before ", &fragment, " after"]);
    assert_snapshot!(
        element.render_html(),
        @"<p>before <b>one</b> and <i>two</i> after</p>"
    );
    assert_eq!(element.children.len(), 5);
    Ok(())
}

#[test]
fn test_empty_fragment_contributes_nothing() -> Result<(), MarkupError> {
    let element = Element::division(nodes!["a", Fragment::parse("")?, "b"]);
    assert_eq!(element.children, vec![Node::text("a"), Node::text("b")]);
    Ok(())
}

#[test]
fn test_nested_import_failure_propagates_unchanged() {
    let result = Element::division(()).try_children(|| {
        Ok::<_, MarkupError>(nodes![
            "ok",
            Fragment::from_bytes(b"<p>x</p>", Encoding::Utf16Be)?,
        ])
    });
    assert_eq!(
        result,
        Err(MarkupError::UnsupportedEncoding("UTF-16BE".to_string()))
    );

    let result = try_nodes(|| Ok::<_, MarkupError>(Fragment::from_bytes(&[0xff, 0xfe], Encoding::Utf8)?));
    assert!(matches!(result, Err(MarkupError::InvalidMarkup(_))));
}

#[test]
fn test_fragment_from_nodes() {
    let fragment = Fragment::from_nodes(nodes!["x", Element::new("br")]);
    assert_eq!(fragment.render_html(""), "x<br>");
    assert_eq!(fragment.render_html("\n"), "x\n<br>");
}

//! Property tests: rendering then importing gives back an equal tree.

use crate::common::merge_adjacent_text;
use markup_builder::{parse, Element, Node};
use proptest::prelude::*;

const NAMES: &[&str] = &["div", "span", "section", "article", "aside", "x-item"];

fn text_strategy() -> impl Strategy<Value = Node> {
    "[a-z<>&\"'][a-z0-9<>&\"' ]{0,10}".prop_map(Node::Text)
}

fn element_strategy() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![text_strategy(), element_with(Just(Vec::new()).boxed())];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            1 => text_strategy(),
            3 => element_with(prop::collection::vec(inner, 0..4).boxed()),
        ]
    })
}

fn element_with(children: BoxedStrategy<Vec<Node>>) -> impl Strategy<Value = Node> {
    let attributes = prop::collection::btree_map(
        "[a-z][a-z0-9-]{0,5}",
        prop::option::of("[a-z0-9 &\"<>']{1,8}"),
        0..4,
    );
    (prop::sample::select(NAMES), attributes, children).prop_map(|(name, attributes, children)| {
        let element = attributes
            .into_iter()
            .fold(Element::new(name), |element, (key, value)| {
                element.set_attr(key, value)
            });
        Node::from(element.child(merge_adjacent_text(children)))
    })
}

fn root_strategy() -> impl Strategy<Value = Node> {
    element_with(prop::collection::vec(element_strategy(), 0..4).boxed())
}

proptest! {
    #[test]
    fn render_then_parse_is_identity(tree in root_strategy()) {
        let rendered = tree.render_html();
        let imported = parse(&rendered).unwrap();
        prop_assert_eq!(imported, vec![tree]);
    }

    #[test]
    fn equality_matches_rendering(left in root_strategy(), right in root_strategy()) {
        prop_assert!(left.is_equal(&left.clone()));
        prop_assert_eq!(left == right, left.render_html() == right.render_html());
        prop_assert_eq!(left.is_equal(&right), right.is_equal(&left));
        prop_assert!(!left.is_equal(None));
    }
}

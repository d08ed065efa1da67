//! Declarative HTML trees for Rust code
//!
//!     This crate builds HTML document trees from ordinary Rust expressions, renders them to
//!     canonical HTML text, and imports existing HTML back into the same tree model.
//!
//!     TLDR:
//!         - Build with [`Element`] and the composition helpers ([`nodes!`], [`when`], [`either`],
//!           [`for_each`], [`concat`]); everything collapses into a flat `Vec<Node>`.
//!         - Render with [`Node::render_html`]: attributes sorted by name, no formatting added.
//!         - Import with [`Fragment::parse`]; a fragment splices its nodes into a composition.
//!
//! Architecture
//!
//!     .
//!     ├── error.rs            # MarkupError and Result alias
//!     ├── node.rs             # Node / Element / attribute model and equality
//!     ├── compose.rs          # IntoNodes and the composition helpers
//!     ├── fragment.rs         # Imported fragments, encodings and import options
//!     ├── catalog.rs          # Well known attributes, element shorthands, modifiers
//!     └── html
//!         ├── mod.rs          # Markup rules shared by both directions
//!         ├── serializer.rs   # Node model → HTML text
//!         ├── parser.rs       # HTML text → node model
//!         └── dom.rs          # Node model ↔ html5ever RcDom
//!
//! Round Trips
//!
//!     For trees made of elements and text, `parse(render(tree)) == tree` holds as long as the
//!     tree matches what HTML itself can express: no adjacent text siblings (the parser merges
//!     them), no whitespace-only text (dropped on import by default), and no `Some("")`
//!     attribute values (HTML cannot tell `d=""` from a bare `d`, and the importer reads both
//!     as valueless). The element structure must also be one the HTML tree builder keeps as is,
//!     e.g. no `<div>` inside `<p>`.
//!
//! Library Choices
//!
//!     Parsing is delegated to `html5ever`, the parser behind Servo, through the
//!     `markup5ever_rcdom` tree. It never rejects input, recovering from malformed markup the
//!     way browsers do. Rendering works directly from the node model, see [`html`].
//!
//! Example
//!
//!     ```ignore
//!     use markup_builder::{either, for_each, nodes, Element, Fragment};
//!
//!     let logged_in = true;
//!     let page = Element::division(nodes![
//!         either(logged_in, || Element::button("Log out"), || Element::button("Log in")),
//!         for_each(["a", "b"], |item| Element::paragraph(item)),
//!         Fragment::parse("<em>imported</em>")?,
//!     ])
//!     .class("page");
//!
//!     assert_eq!(
//!         page.render_html(),
//!         r#"<div class="page"><button type="button">Log out</button><p>a</p><p>b</p><em>imported</em></div>"#
//!     );
//!     ```
pub mod catalog;
pub mod compose;
pub mod error;
pub mod fragment;
pub mod html;
pub mod node;

pub use compose::{concat, either, for_each, try_nodes, when, Branch, ForEach, IntoNodes, Sequence};
pub use error::{MarkupError, Result};
pub use fragment::{Encoding, Fragment, ImportOptions, ImportScope};
pub use html::serializer::{render_nodes, try_render_nodes};
pub use node::{AttributeName, AttributeValue, Attributes, Element, Node, NodeKind};

/// Parse a UTF-8 string and return its body content as a node sequence.
pub fn parse(source: &str) -> Result<Vec<Node>> {
    Fragment::parse(source).map(Fragment::into_inner)
}

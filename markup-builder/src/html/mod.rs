//! HTML transcoding
//!
//! Bidirectional conversion between the node model and HTML text.
//!
//! # Library Choice
//!
//! Parsing goes through the `html5ever` + `markup5ever_rcdom` pair, the browser-grade
//! parser from the Servo project. It recovers from malformed input the way browsers do,
//! which is exactly what importing hand written or third party markup needs.
//!
//! Rendering is done directly from the node model rather than through the engine's
//! serializer: the engine's attribute type has no way to express an attribute that is
//! present without a value, and the model must render `<input disabled>` as such. The
//! renderer follows the engine's markup rules (which elements are void, which elements
//! hold raw text, what gets escaped) using the engine's interned element names.
//!
//! # Rendered Text Contract
//!
//! - Attributes are emitted in ascending name order, whatever order they were set in.
//! - `None` attribute values render as a bare name, `Some("")` as `name=""`.
//! - Void elements have no closing tag and never render children.
//! - Text is escaped (`&`, `<`, `>`, U+00A0), except inside raw text elements.
//! - No indentation or separators are added, and the result is trimmed.
//!
//! # Import Rules
//!
//! - [`crate::ImportScope::Body`] walks the children of `body`; `Root` walks from the
//!   root element.
//! - An attribute with empty value content imports as present without a value: the
//!   tokenizer produces the same token for `d` and `d=""`.
//! - Whitespace-only text is dropped unless [`crate::ImportOptions::keep_blank_text`] is set.
//! - Comments, doctypes and processing instructions are skipped.

pub mod dom;
pub mod parser;
pub mod serializer;

use html5ever::{local_name, LocalName};

/// Elements that never have a closing tag.
pub fn is_void_element(name: &str) -> bool {
    matches!(
        LocalName::from(name),
        local_name!("area")
            | local_name!("base")
            | local_name!("basefont")
            | local_name!("bgsound")
            | local_name!("br")
            | local_name!("col")
            | local_name!("embed")
            | local_name!("frame")
            | local_name!("hr")
            | local_name!("img")
            | local_name!("input")
            | local_name!("keygen")
            | local_name!("link")
            | local_name!("meta")
            | local_name!("param")
            | local_name!("source")
            | local_name!("track")
            | local_name!("wbr")
    )
}

/// Elements whose text content is written without escaping.
pub fn is_raw_text_element(name: &str) -> bool {
    matches!(
        LocalName::from(name),
        local_name!("style")
            | local_name!("script")
            | local_name!("xmp")
            | local_name!("iframe")
            | local_name!("noembed")
            | local_name!("noframes")
            | local_name!("plaintext")
            | local_name!("noscript")
    )
}

//! Imported fragments
//!
//!     A [`Fragment`] is the result of importing existing markup. It is transparent in
//!     composition: used as a child expression it splices its nodes in place instead of
//!     wrapping them.

use crate::error::{MarkupError, Result};
use crate::html::parser;
use crate::node::Node;
use std::fmt;
use std::str::FromStr;

/// Text encodings a caller may declare for an input buffer.
///
/// Only [`Encoding::Utf8`] can be imported; the others exist so that a caller holding
/// bytes in another encoding gets an explicit usage error rather than mojibake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    Utf8,
    Utf16Le,
    Utf16Be,
    Latin1,
    Ascii,
    Windows1252,
}

impl Encoding {
    pub fn label(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "UTF-8",
            Encoding::Utf16Le => "UTF-16LE",
            Encoding::Utf16Be => "UTF-16BE",
            Encoding::Latin1 => "ISO-8859-1",
            Encoding::Ascii => "US-ASCII",
            Encoding::Windows1252 => "windows-1252",
        }
    }

    /// Reject everything the importer cannot read.
    pub fn ensure_supported(self) -> Result<()> {
        match self {
            Encoding::Utf8 => Ok(()),
            other => Err(MarkupError::UnsupportedEncoding(other.label().to_string())),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Encoding {
    type Err = MarkupError;

    fn from_str(label: &str) -> Result<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Encoding::Utf8),
            "utf-16le" => Ok(Encoding::Utf16Le),
            "utf-16be" => Ok(Encoding::Utf16Be),
            "iso-8859-1" | "latin1" | "latin-1" => Ok(Encoding::Latin1),
            "us-ascii" | "ascii" => Ok(Encoding::Ascii),
            "windows-1252" | "cp1252" => Ok(Encoding::Windows1252),
            _ => Err(MarkupError::UnsupportedEncoding(label.to_string())),
        }
    }
}

/// Which part of the parsed document becomes the fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportScope {
    /// The children of the `body` element. A document without body yields no nodes.
    #[default]
    Body,
    /// The document's root element itself, walked from the top.
    Root,
}

impl FromStr for ImportScope {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value {
            "body" => Ok(ImportScope::Body),
            "root" => Ok(ImportScope::Root),
            other => Err(format!("unknown import scope '{other}' (expected body or root)")),
        }
    }
}

/// Options controlling an import.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImportOptions {
    pub scope: ImportScope,
    /// Keep text nodes that contain only whitespace. Off by default, so that markup
    /// written with indentation imports equal to a tree built without it.
    pub keep_blank_text: bool,
}

impl ImportOptions {
    pub fn new(scope: ImportScope) -> Self {
        Self {
            scope,
            keep_blank_text: false,
        }
    }

    pub fn with_blank_text(mut self, keep: bool) -> Self {
        self.keep_blank_text = keep;
        self
    }
}

/// Nodes imported from existing markup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fragment {
    nodes: Vec<Node>,
}

impl Fragment {
    /// Import the body content of a UTF-8 string with default options.
    pub fn parse(source: &str) -> Result<Self> {
        Self::from_bytes(source.as_bytes(), Encoding::Utf8)
    }

    /// Import raw bytes declared to be in `encoding`, with default options.
    pub fn from_bytes(bytes: &[u8], encoding: Encoding) -> Result<Self> {
        Self::import(bytes, encoding, &ImportOptions::default())
    }

    pub fn import(bytes: &[u8], encoding: Encoding, options: &ImportOptions) -> Result<Self> {
        encoding.ensure_supported()?;
        let nodes = parser::import(bytes, options)?;
        Ok(Fragment { nodes })
    }

    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        Fragment { nodes }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn into_inner(self) -> Vec<Node> {
        self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Render every node and join them with `separator`.
    pub fn render_html(&self, separator: &str) -> String {
        crate::html::serializer::render_nodes(&self.nodes, separator)
    }
}

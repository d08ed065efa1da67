//! Error types for building, importing and rendering markup

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MarkupError>;

/// Errors raised at the import and render boundaries.
///
/// Composition itself never fails: fallible sub-expressions propagate their own
/// error type unchanged through [`crate::Element::try_children`] and friends.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    /// The caller asked for a text encoding other than UTF-8.
    #[error("unsupported encoding '{0}': only UTF-8 input can be imported")]
    UnsupportedEncoding(String),

    /// The engine could not produce a parse tree from the input.
    #[error("invalid markup: {0}")]
    InvalidMarkup(String),

    /// The parse succeeded but no root element could be located.
    #[error("invalid markup: no root element found")]
    MissingRoot,

    /// A tree reached the renderer in a state it cannot write as markup.
    #[error("cannot render {node}: {reason}")]
    Invariant { node: String, reason: String },
}

impl MarkupError {
    /// Programming mistakes, not worth retrying or showing to an end user.
    pub fn is_usage_error(&self) -> bool {
        matches!(self, MarkupError::UnsupportedEncoding(_))
    }

    /// Input that could not be turned into a tree.
    pub fn is_invalid_markup(&self) -> bool {
        matches!(self, MarkupError::InvalidMarkup(_) | MarkupError::MissingRoot)
    }
}

//! Validation failures.
//!
//! Every failure is fatal for the fragment being validated and carries the
//! fragment origin plus a scalar-value position so an editor can find it.

use daybook_model::{FragmentId, Position};
use thiserror::Error;

/// A validation failure for one fragment.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{origin}: {kind}")]
pub struct MarkupError {
    pub origin: FragmentId,
    pub kind: MarkupErrorKind,
}

impl MarkupError {
    pub fn new(origin: FragmentId, kind: MarkupErrorKind) -> Self {
        Self { origin, kind }
    }

    pub fn position(&self) -> Position {
        self.kind.position()
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarkupErrorKind {
    /// Bytes are not valid UTF-8.
    #[error("invalid UTF-8 after byte {valid_up_to} (at {position})")]
    Encoding {
        valid_up_to: usize,
        position: Position,
    },

    /// A closing tag that does not match the innermost open element.
    #[error("closing </{found}> at {position} {}", expected_clause(.expected.as_deref()))]
    MismatchedTag {
        found: String,
        expected: Option<String>,
        position: Position,
    },

    /// An element still open at the end of the text.
    #[error("<{tag}> opened at {position} is never closed")]
    UnclosedTag { tag: String, position: Position },

    /// A link whose target is not an http(s) URL.
    #[error("link at {position} must use http:// or https://, found '{url}'")]
    LinkScheme { url: String, position: Position },

    /// Formatting nested inside a code element.
    #[error("<{tag}> at {position} is not allowed inside <{container}>")]
    NestedCodeStyle {
        tag: String,
        container: String,
        position: Position,
    },
}

impl MarkupErrorKind {
    pub fn position(&self) -> Position {
        match self {
            Self::Encoding { position, .. }
            | Self::MismatchedTag { position, .. }
            | Self::UnclosedTag { position, .. }
            | Self::LinkScheme { position, .. }
            | Self::NestedCodeStyle { position, .. } => *position,
        }
    }

    /// Stable identifier used in check reports.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Encoding { .. } => "markup.encoding",
            Self::MismatchedTag { .. } => "markup.mismatched_tag",
            Self::UnclosedTag { .. } => "markup.unclosed_tag",
            Self::LinkScheme { .. } => "markup.link_scheme",
            Self::NestedCodeStyle { .. } => "markup.nested_code_style",
        }
    }
}

fn expected_clause(expected: Option<&str>) -> String {
    match expected {
        Some(tag) => format!("does not match open <{tag}>"),
        None => "has no matching opening tag".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, MarkupError>;

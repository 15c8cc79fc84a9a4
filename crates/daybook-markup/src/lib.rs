//! Markup validation for the chat HTML dialect.
//!
//! Text fragments are authored in a small HTML-like subset. [`validate`]
//! turns one into a [`RenderedText`] the chat API will accept, or fails with
//! a [`MarkupError`] pointing at the offending spot.
//!
//! The pass is a single left-to-right scan into a token stream, followed by
//! a stack-based structural pass that builds a [`MarkupNode`] tree:
//!
//! - allow-listed tags are normalized to one canonical spelling;
//! - unknown tags are not errors: their brackets are escaped and they read
//!   as literal text;
//! - mismatched or unclosed tags, non-http(s) links and formatting inside
//!   code are hard failures;
//! - character references (`&lt;`, `&amp;`, `&#60;`, ...) are decoded once
//!   and re-escaped on output, so validating rendered text is a no-op.
//!
//! ```
//! use daybook_markup::validate_str;
//!
//! let rendered = validate_str("day.txt", "<strong>Day 1</strong> <xyz> & more").unwrap();
//! assert_eq!(rendered.as_str(), "<b>Day 1</b> &lt;xyz&gt; &amp; more");
//! ```

mod error;
mod escape;
mod lexer;
mod render;
mod tag;
mod tree;

pub use error::{MarkupError, MarkupErrorKind, Result};
pub use escape::{escape_attribute, escape_text};
pub use render::RenderedText;
pub use tag::AllowedTag;
pub use tree::{Element, MarkupNode};

use daybook_model::{FragmentId, Position, TextFragment};
use tracing::debug;

use crate::lexer::Lexer;

/// A validated markup tree.
///
/// Only obtainable through [`parse`], so it always satisfies the dialect's
/// structural rules and can be rendered without further checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    nodes: Vec<MarkupNode>,
}

impl Document {
    pub fn nodes(&self) -> &[MarkupNode] {
        &self.nodes
    }

    pub fn render(&self) -> RenderedText {
        RenderedText::from_nodes(&self.nodes)
    }

    /// Concatenated text content with all markup removed.
    pub fn plain_text(&self) -> String {
        fn collect(nodes: &[MarkupNode], out: &mut String) {
            for node in nodes {
                match node {
                    MarkupNode::Text { text } => out.push_str(text),
                    MarkupNode::Element(element) => collect(&element.children, out),
                }
            }
        }
        let mut out = String::new();
        collect(&self.nodes, &mut out);
        out
    }
}

/// Parse and check a fragment without rendering it.
pub fn parse(fragment: &TextFragment) -> Result<Document> {
    let text = decode_utf8(fragment)?;
    parse_text(fragment.origin(), text)
}

/// Validate a fragment and render it canonically.
pub fn validate(fragment: &TextFragment) -> Result<RenderedText> {
    let document = parse(fragment)?;
    let rendered = document.render();
    debug!(
        origin = %fragment.origin(),
        input_bytes = fragment.bytes().len(),
        output_bytes = rendered.as_str().len(),
        "validated fragment"
    );
    Ok(rendered)
}

/// Validate text that is already decoded.
pub fn validate_str(origin: impl Into<FragmentId>, text: &str) -> Result<RenderedText> {
    let origin = origin.into();
    Ok(parse_text(&origin, text)?.render())
}

fn parse_text(origin: &FragmentId, text: &str) -> Result<Document> {
    let tokens = Lexer::tokenize(text);
    tree::build(tokens)
        .map(|nodes| Document { nodes })
        .map_err(|kind| MarkupError::new(origin.clone(), kind))
}

/// Borrow a fragment's text, failing with an encoding error if it is not UTF-8.
pub fn decode_utf8(fragment: &TextFragment) -> Result<&str> {
    std::str::from_utf8(fragment.bytes()).map_err(|err| {
        let valid_up_to = err.valid_up_to();
        // The prefix is valid by definition of `valid_up_to`.
        let prefix = std::str::from_utf8(&fragment.bytes()[..valid_up_to]).unwrap_or_default();
        MarkupError::new(
            fragment.origin().clone(),
            MarkupErrorKind::Encoding {
                valid_up_to,
                position: position_after(prefix),
            },
        )
    })
}

/// Position just past the end of `text`.
fn position_after(text: &str) -> Position {
    let mut position = Position::start();
    for c in text.chars() {
        position.offset += 1;
        if c == '\n' {
            position.line += 1;
            position.column = 1;
        } else {
            position.column += 1;
        }
    }
    position
}

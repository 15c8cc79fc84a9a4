//! Canonical serialization of a validated tree.

use std::fmt;

use serde::Serialize;

use crate::escape::{escape_attribute, escape_text};
use crate::tree::{Element, MarkupNode};

/// Markup ready for the chat API.
///
/// Only produced from a validated tree, so tags are allow-listed, balanced
/// and canonically spelled, links are http(s), and every literal `<`, `>`
/// and `&` is escaped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RenderedText(String);

impl RenderedText {
    pub(crate) fn from_nodes(nodes: &[MarkupNode]) -> Self {
        let mut out = String::new();
        for node in nodes {
            write_node(&mut out, node);
        }
        Self(out)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length in Unicode scalar values.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for RenderedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RenderedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn write_node(out: &mut String, node: &MarkupNode) {
    match node {
        MarkupNode::Text { text } => out.push_str(&escape_text(text)),
        MarkupNode::Element(element) => write_element(out, element),
    }
}

fn write_element(out: &mut String, element: &Element) {
    let name = element.tag.canonical_name();
    out.push('<');
    out.push_str(name);
    for (key, value) in &element.attributes {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&escape_attribute(value));
        out.push('"');
    }
    out.push('>');
    for child in &element.children {
        write_node(out, child);
    }
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

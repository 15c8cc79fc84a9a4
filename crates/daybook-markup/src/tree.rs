//! Stack-based structural pass over the token stream.

use std::collections::BTreeMap;

use daybook_model::Position;
use serde::Serialize;
use tracing::trace;

use crate::error::MarkupErrorKind;
use crate::lexer::Token;
use crate::tag::AllowedTag;

const ALLOWED_SCHEMES: [&str; 2] = ["http://", "https://"];

/// A parsed markup node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MarkupNode {
    Text { text: String },
    Element(Element),
}

impl MarkupNode {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }
}

/// An allow-listed element with its normalized attributes.
///
/// Only `href` survives normalization, and only on links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag: AllowedTag,
    pub attributes: BTreeMap<String, String>,
    pub children: Vec<MarkupNode>,
}

impl Element {
    pub fn new(tag: AllowedTag) -> Self {
        Self {
            tag,
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn href(&self) -> Option<&str> {
        self.attributes.get("href").map(String::as_str)
    }
}

fn push_node(children: &mut Vec<MarkupNode>, node: MarkupNode) {
    if let MarkupNode::Text { text } = &node
        && let Some(MarkupNode::Text { text: last }) = children.last_mut()
    {
        last.push_str(text);
        return;
    }
    children.push(node);
}

struct OpenElement {
    element: Element,
    position: Position,
}

/// Build the node tree, enforcing nesting, link and code rules.
pub(crate) fn build(tokens: Vec<Token>) -> Result<Vec<MarkupNode>, MarkupErrorKind> {
    let mut root = Vec::new();
    let mut stack: Vec<OpenElement> = Vec::new();

    for token in tokens {
        match token {
            Token::Text { text, .. } => {
                let children = match stack.last_mut() {
                    Some(open) => &mut open.element.children,
                    None => &mut root,
                };
                push_node(children, MarkupNode::Text { text });
            }
            Token::Open {
                tag,
                name,
                attributes,
                self_closing,
                position,
            } => {
                if let Some(open) = stack.last()
                    && open.element.tag.is_code()
                {
                    return Err(MarkupErrorKind::NestedCodeStyle {
                        tag: name,
                        container: open.element.tag.canonical_name().to_string(),
                        position,
                    });
                }
                let element = normalize(tag, attributes, position)?;
                if self_closing {
                    let children = match stack.last_mut() {
                        Some(open) => &mut open.element.children,
                        None => &mut root,
                    };
                    children.push(MarkupNode::Element(element));
                } else {
                    trace!(tag = %tag, offset = position.offset, "open element");
                    stack.push(OpenElement { element, position });
                }
            }
            Token::Close {
                tag,
                name,
                position,
            } => {
                let Some(open) = stack.pop() else {
                    return Err(MarkupErrorKind::MismatchedTag {
                        found: name,
                        expected: None,
                        position,
                    });
                };
                if open.element.tag != tag {
                    return Err(MarkupErrorKind::MismatchedTag {
                        found: name,
                        expected: Some(open.element.tag.canonical_name().to_string()),
                        position,
                    });
                }
                let children = match stack.last_mut() {
                    Some(parent) => &mut parent.element.children,
                    None => &mut root,
                };
                children.push(MarkupNode::Element(open.element));
            }
        }
    }

    if let Some(open) = stack.pop() {
        return Err(MarkupErrorKind::UnclosedTag {
            tag: open.element.tag.canonical_name().to_string(),
            position: open.position,
        });
    }
    Ok(root)
}

/// Keep only the attributes the dialect defines and check link targets.
fn normalize(
    tag: AllowedTag,
    mut attributes: BTreeMap<String, String>,
    position: Position,
) -> Result<Element, MarkupErrorKind> {
    let mut element = Element::new(tag);
    if tag == AllowedTag::Link {
        let url = attributes.remove("href").unwrap_or_default();
        if !has_allowed_scheme(&url) {
            return Err(MarkupErrorKind::LinkScheme { url, position });
        }
        element.attributes.insert("href".to_string(), url);
    }
    Ok(element)
}

fn has_allowed_scheme(url: &str) -> bool {
    ALLOWED_SCHEMES.iter().any(|scheme| {
        url.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

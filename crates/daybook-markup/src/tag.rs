//! The closed set of tags the chat API accepts.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Class value that turns a `span` into a spoiler.
pub(crate) const SPOILER_CLASS: &str = "tg-spoiler";

/// An allow-listed formatting element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AllowedTag {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Spoiler,
    InlineCode,
    CodeBlock,
    Link,
}

impl AllowedTag {
    pub const ALL: [AllowedTag; 8] = [
        AllowedTag::Bold,
        AllowedTag::Italic,
        AllowedTag::Underline,
        AllowedTag::Strikethrough,
        AllowedTag::Spoiler,
        AllowedTag::InlineCode,
        AllowedTag::CodeBlock,
        AllowedTag::Link,
    ];

    /// Resolve a lowercase tag name to an allowed tag.
    ///
    /// `span` is not resolved here because it is only a spoiler when it
    /// carries the spoiler class; see [`AllowedTag::from_open_tag`].
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "b" | "strong" => Some(Self::Bold),
            "i" | "em" => Some(Self::Italic),
            "u" | "ins" => Some(Self::Underline),
            "s" | "strike" | "del" => Some(Self::Strikethrough),
            "tg-spoiler" => Some(Self::Spoiler),
            "code" => Some(Self::InlineCode),
            "pre" => Some(Self::CodeBlock),
            "a" => Some(Self::Link),
            _ => None,
        }
    }

    /// Resolve an opening tag, taking the spoiler `span` form into account.
    pub fn from_open_tag(name: &str, attributes: &BTreeMap<String, String>) -> Option<Self> {
        if name == "span" {
            return is_spoiler_span(attributes).then_some(Self::Spoiler);
        }
        Self::from_name(name)
    }

    /// The single spelling emitted in rendered output.
    pub fn canonical_name(self) -> &'static str {
        match self {
            Self::Bold => "b",
            Self::Italic => "i",
            Self::Underline => "u",
            Self::Strikethrough => "s",
            Self::Spoiler => "tg-spoiler",
            Self::InlineCode => "code",
            Self::CodeBlock => "pre",
            Self::Link => "a",
        }
    }

    /// Code elements hold verbatim text only.
    pub fn is_code(self) -> bool {
        matches!(self, Self::InlineCode | Self::CodeBlock)
    }
}

impl fmt::Display for AllowedTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

fn is_spoiler_span(attributes: &BTreeMap<String, String>) -> bool {
    attributes
        .get("class")
        .is_some_and(|class| class.trim() == SPOILER_CLASS)
}

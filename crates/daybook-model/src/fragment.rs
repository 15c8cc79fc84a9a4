//! Raw text fragments and source positions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of a fragment, usually a path relative to the program root.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FragmentId(String);

impl FragmentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FragmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FragmentId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for FragmentId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Raw content read from one source file.
///
/// The bytes are kept undecoded: UTF-8 validation is the markup validator's
/// job so that encoding failures surface with the fragment's origin attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFragment {
    origin: FragmentId,
    bytes: Vec<u8>,
}

impl TextFragment {
    pub fn new(origin: impl Into<FragmentId>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            origin: origin.into(),
            bytes: bytes.into(),
        }
    }

    /// Build a fragment from text that is already known to be valid.
    pub fn from_text(origin: impl Into<FragmentId>, text: &str) -> Self {
        Self::new(origin, text.as_bytes().to_vec())
    }

    pub fn origin(&self) -> &FragmentId {
        &self.origin
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.iter().all(u8::is_ascii_whitespace)
    }
}

/// Location inside a fragment, counted in Unicode scalar values.
///
/// `offset` is zero-based; `line` and `column` are one-based and meant for
/// humans editing the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    pub const fn start() -> Self {
        Self::new(0, 1, 1)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} (offset {})", self.line, self.column, self.offset)
    }
}

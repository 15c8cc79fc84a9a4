//! Relative paths for browsing a content tree folder by folder.

use std::fmt;

use serde::Serialize;

use crate::error::BrowseError;

/// A normalised path below a content root. The empty path is the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BrowsePath(Vec<String>);

impl BrowsePath {
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a user-supplied path.
    ///
    /// Empty and `.` segments are dropped and backslashes count as
    /// separators. Any `..` segment is rejected outright.
    pub fn parse(input: &str) -> Result<Self, BrowseError> {
        let mut segments = Vec::new();
        for segment in input.trim().split(['/', '\\']) {
            match segment {
                "" | "." => {}
                ".." => {
                    return Err(BrowseError::Traversal {
                        path: input.to_string(),
                    });
                }
                other => segments.push(other.to_string()),
            }
        }
        Ok(Self(segments))
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn name(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// `None` at the root.
    pub fn parent(&self) -> Option<Self> {
        let (_, init) = self.0.split_last()?;
        Some(Self(init.to_vec()))
    }

    /// Append one child name. Names containing separators or `..` are
    /// rejected like any other traversal.
    pub fn join(&self, child: &str) -> Result<Self, BrowseError> {
        let child = Self::parse(child)?;
        let mut segments = self.0.clone();
        segments.extend(child.0);
        Ok(Self(segments))
    }

    /// Every ancestor from the first segment down to this path.
    pub fn breadcrumbs(&self) -> Vec<Self> {
        (1..=self.0.len())
            .map(|n| Self(self.0[..n].to_vec()))
            .collect()
    }
}

impl fmt::Display for BrowsePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalises_separators() {
        let path = BrowsePath::parse(" /gifts//wrapped\\red/./ ").expect("valid");
        assert_eq!(path.to_string(), "gifts/wrapped/red");
        assert_eq!(path.name(), Some("red"));
    }

    #[test]
    fn rejects_traversal() {
        for bad in ["..", "../etc", "a/../../b", "a\\..\\b"] {
            assert!(
                matches!(BrowsePath::parse(bad), Err(BrowseError::Traversal { .. })),
                "{bad}"
            );
        }
        assert!(BrowsePath::root().join("..").is_err());
    }

    #[test]
    fn parent_and_root() {
        let path = BrowsePath::parse("a/b").expect("valid");
        assert_eq!(path.parent().map(|p| p.to_string()), Some("a".to_string()));
        assert!(BrowsePath::parse("").expect("valid").is_root());
        assert_eq!(BrowsePath::root().parent(), None);
    }

    #[test]
    fn breadcrumbs_lists_ancestors() {
        let path = BrowsePath::parse("a/b").expect("valid");
        let crumbs: Vec<String> = path.breadcrumbs().iter().map(ToString::to_string).collect();
        assert_eq!(crumbs, ["a", "a/b"]);
        assert!(BrowsePath::root().breadcrumbs().is_empty());
    }
}

use serde::{Deserialize, Serialize};

use crate::fragment::{FragmentId, Position};
use crate::ordinal::Ordinal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// A problem found while checking a folder's content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckIssue {
    /// Stable machine-readable code (e.g., "markup.link_scheme").
    pub code: String,
    /// Human-readable message describing the issue.
    pub message: String,
    /// Severity level.
    pub severity: IssueSeverity,
    /// Fragment the issue was found in (if applicable).
    pub origin: Option<FragmentId>,
    /// Location inside the fragment (if applicable).
    pub position: Option<Position>,
}

/// Check results for a single day folder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FolderReport {
    pub ordinal: Option<Ordinal>,
    pub folder: String,
    pub issues: Vec<CheckIssue>,
}

impl FolderReport {
    pub fn new(ordinal: Option<Ordinal>, folder: impl Into<String>) -> Self {
        Self {
            ordinal,
            folder: folder.into(),
            issues: Vec::new(),
        }
    }

    pub fn push(&mut self, issue: CheckIssue) {
        self.issues.push(issue);
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }
}

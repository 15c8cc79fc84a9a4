//! Error types for navigation operations.

use daybook_model::Ordinal;
use thiserror::Error;

/// Navigation-structure violations. Fatal for one render, never for the driver.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// No folder has the requested ordinal.
    #[error("no day folder with ordinal {ordinal}")]
    UnknownOrdinal { ordinal: Ordinal },

    /// More than one folder claims the same ordinal.
    #[error("ordinal {ordinal} is claimed by several folders: {}", .folders.join(", "))]
    DuplicateOrdinal {
        ordinal: Ordinal,
        folders: Vec<String>,
    },
}

impl NavigationError {
    /// Stable identifier used in check reports.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownOrdinal { .. } => "navigation.unknown_ordinal",
            Self::DuplicateOrdinal { .. } => "navigation.duplicate_ordinal",
        }
    }
}

/// Rejected browse paths.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BrowseError {
    #[error("path '{path}' leaves the content root")]
    Traversal { path: String },
}

pub type Result<T> = std::result::Result<T, NavigationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NavigationError::DuplicateOrdinal {
            ordinal: Ordinal::new(3),
            folders: vec!["3_day".to_string(), "03_day".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "ordinal 3 is claimed by several folders: 3_day, 03_day"
        );
        assert_eq!(err.code(), "navigation.duplicate_ordinal");
    }
}

//! Content model shared by the daybook crates.
//!
//! A *program* is an ordered set of day folders. Each folder holds text
//! fragments and an optional navigation descriptor. The types here are plain
//! immutable values; reading them from storage belongs to a [`ContentSource`].

pub mod error;
pub mod fragment;
pub mod ordinal;
pub mod program;
pub mod report;
pub mod source;

pub use error::{ModelError, Result};
pub use fragment::{FragmentId, Position, TextFragment};
pub use ordinal::Ordinal;
pub use program::{Attachment, AttachmentKind, FolderEntry, Program};
pub use report::{CheckIssue, FolderReport, IssueSeverity};
pub use source::ContentSource;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folder_report_counts() {
        let report = FolderReport {
            ordinal: Some(Ordinal::new(3)),
            folder: "3_day".to_string(),
            issues: vec![
                CheckIssue {
                    code: "markup.mismatched_tag".to_string(),
                    message: "closing </i> does not match open <b>".to_string(),
                    severity: IssueSeverity::Error,
                    origin: Some(FragmentId::new("3_day/text.txt")),
                    position: Some(Position::new(12, 1, 13)),
                },
                CheckIssue {
                    code: "folder.no_text".to_string(),
                    message: "folder has no text fragments".to_string(),
                    severity: IssueSeverity::Warning,
                    origin: None,
                    position: None,
                },
            ],
        };
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 1);
        assert!(report.has_errors());
    }

    #[test]
    fn model_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Program>();
        assert_send_sync::<TextFragment>();
        assert_send_sync::<FolderReport>();
    }
}

//! Whole-program checking.
//!
//! Every fragment is validated and every folder's navigation message is
//! rendered, collecting failures per folder instead of stopping at the
//! first one.

use std::time::Instant;

use daybook_markup::{MarkupError, decode_utf8, validate};
use daybook_model::{
    CheckIssue, ContentSource, FolderEntry, FolderReport, IssueSeverity, Program,
};
use daybook_nav::{NavigationError, RenderOptions, render, resolve, unknown_placeholders};
use tracing::{debug, info, info_span};

/// Check every folder of the source's program.
///
/// Only failing to list the program is an error; everything else becomes an
/// issue in the folder's report.
pub fn check_program<S: ContentSource>(
    source: &S,
    options: &RenderOptions,
) -> Result<Vec<FolderReport>, S::Error> {
    let start = Instant::now();
    let program = source.list_program()?;
    let mut entries: Vec<&FolderEntry> = program.entries().iter().collect();
    entries.sort_by(|a, b| a.ordinal.cmp(&b.ordinal).then_with(|| a.name.cmp(&b.name)));

    let reports: Vec<FolderReport> = entries
        .into_iter()
        .map(|entry| check_folder(source, &program, entry, options))
        .collect();

    info!(
        folders = reports.len(),
        errors = reports.iter().map(FolderReport::error_count).sum::<usize>(),
        warnings = reports.iter().map(FolderReport::warning_count).sum::<usize>(),
        duration_ms = start.elapsed().as_millis(),
        "check complete"
    );
    Ok(reports)
}

fn check_folder<S: ContentSource>(
    source: &S,
    program: &Program,
    entry: &FolderEntry,
    options: &RenderOptions,
) -> FolderReport {
    let span = info_span!("folder", name = %entry.name, ordinal = %entry.ordinal);
    let _guard = span.enter();
    let mut report = FolderReport::new(Some(entry.ordinal), entry.name.clone());

    if entry.fragments.is_empty() {
        report.push(warning("folder.no_text", "folder has no text fragments"));
    }

    for id in &entry.fragments {
        match source.read_fragment(id) {
            Ok(fragment) => {
                if let Err(err) = validate(&fragment) {
                    report.push(markup_issue(&err));
                }
            }
            Err(err) => report.push(CheckIssue {
                code: "source.read".to_string(),
                message: err.to_string(),
                severity: IssueSeverity::Error,
                origin: Some(id.clone()),
                position: None,
            }),
        }
    }

    if let Some(descriptor) = &entry.navigation_descriptor
        && let Ok(template) = decode_utf8(descriptor)
    {
        for name in unknown_placeholders(template) {
            report.push(CheckIssue {
                origin: Some(descriptor.origin().clone()),
                ..warning(
                    "navigation.unknown_placeholder",
                    format!("unknown placeholder {{{name}}} is shown verbatim"),
                )
            });
        }
    }

    match resolve(program, entry.ordinal) {
        Ok(state) => {
            if let Err(err) = render(&state, options) {
                report.push(markup_issue(&err));
            }
        }
        Err(err) => report.push(navigation_issue(&err)),
    }

    debug!(
        errors = report.error_count(),
        warnings = report.warning_count(),
        "checked folder"
    );
    report
}

fn warning(code: &str, message: impl Into<String>) -> CheckIssue {
    CheckIssue {
        code: code.to_string(),
        message: message.into(),
        severity: IssueSeverity::Warning,
        origin: None,
        position: None,
    }
}

fn markup_issue(err: &MarkupError) -> CheckIssue {
    CheckIssue {
        code: err.kind.code().to_string(),
        message: err.kind.to_string(),
        severity: IssueSeverity::Error,
        origin: Some(err.origin.clone()),
        position: Some(err.position()),
    }
}

fn navigation_issue(err: &NavigationError) -> CheckIssue {
    CheckIssue {
        code: err.code().to_string(),
        message: err.to_string(),
        severity: IssueSeverity::Error,
        origin: None,
        position: None,
    }
}

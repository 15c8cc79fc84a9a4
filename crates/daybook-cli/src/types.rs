use std::path::PathBuf;

use daybook_model::{FolderReport, Ordinal};

#[derive(Debug)]
pub struct CheckResult {
    pub program_dir: PathBuf,
    pub reports: Vec<FolderReport>,
    pub has_errors: bool,
}

#[derive(Debug)]
pub struct ScheduleResult {
    pub current_day: Option<Ordinal>,
    pub due: Vec<Ordinal>,
}

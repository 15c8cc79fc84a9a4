//! Filesystem content for daybook programs.
//!
//! A program directory holds one subdirectory per day, named with a leading
//! number (`1_day`, `02-intro`, `10_day`). Each day folder contains text
//! fragments, an optional navigation descriptor (`msg.txt` by default) and
//! any media attachments.

pub mod discovery;
pub mod error;
pub mod source;

pub use discovery::{
    DayFolder, DiscoveryOptions, discover_program, list_day_folders, list_files, scan_folder,
};
pub use error::{IngestError, Result};
pub use source::{BrowseListing, FsContentSource};

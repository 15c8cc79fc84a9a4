//! Error types for reading program content from disk.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while discovering folders or reading fragments.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Program directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Fragment file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A fragment id that would resolve outside the program directory.
    #[error("fragment id '{id}' points outside the program directory")]
    PathEscape { id: String },
}

pub type Result<T> = std::result::Result<T, IngestError>;

//! Day-folder discovery.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use daybook_model::{
    Attachment, AttachmentKind, FolderEntry, FragmentId, Ordinal, Program, TextFragment,
};
use tracing::{debug, info, warn};

use crate::error::{IngestError, Result};

/// What counts as text, and which file is the navigation descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryOptions {
    pub descriptor_file: String,
    /// Lowercase extensions without the dot.
    pub text_extensions: Vec<String>,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            descriptor_file: "msg.txt".to_string(),
            text_extensions: vec!["txt".to_string(), "text".to_string()],
        }
    }
}

impl DiscoveryOptions {
    pub fn is_descriptor(&self, file_name: &str) -> bool {
        file_name.eq_ignore_ascii_case(&self.descriptor_file)
    }

    pub fn is_text(&self, path: &Path) -> bool {
        path.extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| {
                self.text_extensions
                    .iter()
                    .any(|t| t.eq_ignore_ascii_case(ext))
            })
    }
}

/// A day folder found under the program directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayFolder {
    pub ordinal: Ordinal,
    pub name: String,
    pub path: PathBuf,
}

/// Lists the digit-prefixed subdirectories of `root`, by ordinal then name.
pub fn list_day_folders(root: &Path) -> Result<Vec<DayFolder>> {
    let mut folders = Vec::new();
    for path in read_dir_sorted(root)? {
        if !path.is_dir() {
            continue;
        }
        let Some(name) = utf8_file_name(&path) else {
            warn!(path = %path.display(), "skipping folder with non UTF-8 name");
            continue;
        };
        match Ordinal::from_folder_name(name) {
            Ok(ordinal) => folders.push(DayFolder {
                ordinal,
                name: name.to_string(),
                path: path.clone(),
            }),
            Err(_) => debug!(folder = name, "not a day folder"),
        }
    }
    folders.sort_by(|a, b| a.ordinal.cmp(&b.ordinal).then_with(|| a.name.cmp(&b.name)));
    Ok(folders)
}

/// Lists the regular files in `dir`, sorted by filename.
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    Ok(read_dir_sorted(dir)?
        .into_iter()
        .filter(|path| path.is_file())
        .collect())
}

/// Builds the entry for one day folder, reading its descriptor if present.
pub fn scan_folder(folder: &DayFolder, options: &DiscoveryOptions) -> Result<FolderEntry> {
    let mut entry = FolderEntry::new(folder.ordinal, folder.name.clone());

    for path in list_files(&folder.path)? {
        let Some(file_name) = utf8_file_name(&path) else {
            warn!(path = %path.display(), "skipping file with non UTF-8 name");
            continue;
        };
        if file_name.starts_with('.') {
            continue;
        }
        let id = FragmentId::new(format!("{}/{file_name}", folder.name));

        if options.is_descriptor(file_name) {
            let bytes = read_bytes(&path)?;
            entry = entry.with_navigation_descriptor(TextFragment::new(id, bytes));
        } else if options.is_text(&path) {
            entry = entry.with_fragment(id);
        } else if let Some(kind) = AttachmentKind::from_path(&path) {
            entry = entry.with_attachment(Attachment { id, kind });
        } else {
            debug!(file = %id, "ignoring unrecognised file");
        }
    }

    debug!(
        folder = %folder.name,
        fragments = entry.fragments.len(),
        attachments = entry.attachments.len(),
        descriptor = entry.navigation_descriptor.is_some(),
        "scanned day folder"
    );
    Ok(entry)
}

/// Discovers every day folder under `root`.
pub fn discover_program(root: &Path, options: &DiscoveryOptions) -> Result<Program> {
    let folders = list_day_folders(root)?;
    let entries = folders
        .iter()
        .map(|folder| scan_folder(folder, options))
        .collect::<Result<Vec<_>>>()?;
    info!(root = %root.display(), folders = entries.len(), "discovered program");
    Ok(Program::new(entries))
}

pub(crate) fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

pub(crate) fn read_dir_sorted(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }
    let entries = std::fs::read_dir(dir).map_err(|source| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?;
        paths.push(entry.path());
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

pub(crate) fn utf8_file_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(OsStr::to_str)
}

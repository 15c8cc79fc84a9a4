//! [`ContentSource`] backed by a local directory.

use std::path::{Component, Path, PathBuf};

use daybook_model::{ContentSource, FragmentId, Program, TextFragment};
use daybook_nav::BrowsePath;
use serde::Serialize;
use tracing::debug;

use crate::discovery::{
    DiscoveryOptions, discover_program, list_files, read_bytes, read_dir_sorted, utf8_file_name,
};
use crate::error::{IngestError, Result};

/// Reads a program from a directory of day folders.
#[derive(Debug, Clone)]
pub struct FsContentSource {
    root: PathBuf,
    options: DiscoveryOptions,
}

impl FsContentSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_options(root, DiscoveryOptions::default())
    }

    pub fn with_options(root: impl Into<PathBuf>, options: DiscoveryOptions) -> Self {
        Self {
            root: root.into(),
            options,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn options(&self) -> &DiscoveryOptions {
        &self.options
    }

    /// Map a fragment id onto the filesystem.
    ///
    /// Ids are `/`-separated and relative; anything absolute or containing
    /// `..` is refused.
    pub fn resolve_id(&self, id: &FragmentId) -> Result<PathBuf> {
        let relative = Path::new(id.as_str());
        let escapes = id.as_str().is_empty()
            || relative
                .components()
                .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return Err(IngestError::PathEscape {
                id: id.as_str().to_string(),
            });
        }
        Ok(self.root.join(relative))
    }

    /// List one folder of the tree for browsing.
    pub fn browse(&self, path: &BrowsePath) -> Result<BrowseListing> {
        let dir = path
            .segments()
            .iter()
            .fold(self.root.clone(), |dir, segment| dir.join(segment));

        let mut folders = Vec::new();
        for child in read_dir_sorted(&dir)? {
            if child.is_dir()
                && let Some(name) = utf8_file_name(&child)
                && !name.starts_with('.')
            {
                folders.push(name.to_string());
            }
        }

        let prefix = path.to_string();
        let id_for = |name: &str| {
            if prefix.is_empty() {
                FragmentId::new(name)
            } else {
                FragmentId::new(format!("{prefix}/{name}"))
            }
        };

        let mut files = Vec::new();
        let mut descriptor = None;
        for file in list_files(&dir)? {
            let Some(name) = utf8_file_name(&file) else {
                continue;
            };
            if name.starts_with('.') {
                continue;
            }
            if self.options.is_descriptor(name) {
                descriptor = Some(TextFragment::new(id_for(name), read_bytes(&file)?));
            } else {
                files.push(id_for(name));
            }
        }

        debug!(path = %path, folders = folders.len(), files = files.len(), "browsed folder");
        Ok(BrowseListing {
            path: path.clone(),
            folders,
            files,
            descriptor,
        })
    }
}

impl ContentSource for FsContentSource {
    type Error = IngestError;

    fn list_program(&self) -> Result<Program> {
        discover_program(&self.root, &self.options)
    }

    fn read_fragment(&self, id: &FragmentId) -> Result<TextFragment> {
        let path = self.resolve_id(id)?;
        let bytes = read_bytes(&path)?;
        debug!(fragment = %id, bytes = bytes.len(), "read fragment");
        Ok(TextFragment::new(id.clone(), bytes))
    }
}

/// Contents of one browsed folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrowseListing {
    pub path: BrowsePath,
    pub folders: Vec<String>,
    pub files: Vec<FragmentId>,
    /// The folder's descriptor file, kept out of `files`.
    #[serde(skip)]
    pub descriptor: Option<TextFragment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_escaping_ids() {
        let source = FsContentSource::new("/srv/program");
        for bad in ["../secret.txt", "1_day/../../x", "/etc/passwd", ""] {
            assert!(
                matches!(
                    source.resolve_id(&FragmentId::new(bad)),
                    Err(IngestError::PathEscape { .. })
                ),
                "{bad}"
            );
        }
        assert_eq!(
            source
                .resolve_id(&FragmentId::new("1_day/a.txt"))
                .expect("inside root"),
            PathBuf::from("/srv/program/1_day/a.txt")
        );
    }
}

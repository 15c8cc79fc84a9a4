//! Day folders and the program snapshot.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::fragment::{FragmentId, TextFragment};
use crate::ordinal::Ordinal;

/// Coarse classification of non-text files found in a day folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    Image,
    Video,
    Audio,
    Document,
}

impl AttachmentKind {
    const IMAGE: &'static [&'static str] = &[
        "jpg", "jpeg", "png", "gif", "bmp", "webp", "svg", "ico", "tiff", "tif",
    ];
    const VIDEO: &'static [&'static str] = &[
        "mp4", "avi", "mov", "mkv", "webm", "flv", "wmv", "m4v", "3gp", "ogv",
    ];
    const AUDIO: &'static [&'static str] = &[
        "mp3", "wav", "ogg", "flac", "aac", "m4a", "wma", "opus", "amr",
    ];
    const DOCUMENT: &'static [&'static str] = &["doc", "docx", "pdf"];

    /// Classify a file by its extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        let ext = ext.as_str();
        if Self::IMAGE.contains(&ext) {
            Some(Self::Image)
        } else if Self::VIDEO.contains(&ext) {
            Some(Self::Video)
        } else if Self::AUDIO.contains(&ext) {
            Some(Self::Audio)
        } else if Self::DOCUMENT.contains(&ext) {
            Some(Self::Document)
        } else {
            None
        }
    }
}

/// A non-text file the Sender delivers alongside the day's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: FragmentId,
    pub kind: AttachmentKind,
}

/// One day folder of a program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderEntry {
    pub ordinal: Ordinal,
    /// Folder name as found in storage, e.g. `3_day`.
    pub name: String,
    /// Text fragments in delivery order.
    pub fragments: Vec<FragmentId>,
    pub attachments: Vec<Attachment>,
    /// Template for the folder's navigation message.
    pub navigation_descriptor: Option<TextFragment>,
}

impl FolderEntry {
    pub fn new(ordinal: Ordinal, name: impl Into<String>) -> Self {
        Self {
            ordinal,
            name: name.into(),
            fragments: Vec::new(),
            attachments: Vec::new(),
            navigation_descriptor: None,
        }
    }

    #[must_use]
    pub fn with_fragment(mut self, id: impl Into<FragmentId>) -> Self {
        self.fragments.push(id.into());
        self
    }

    #[must_use]
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    #[must_use]
    pub fn with_navigation_descriptor(mut self, descriptor: TextFragment) -> Self {
        self.navigation_descriptor = Some(descriptor);
        self
    }
}

/// Immutable snapshot of every folder in a program.
///
/// Entries are kept in the order the source produced them. Ordinal
/// uniqueness is not enforced here: the navigation assembler reports
/// collisions instead of silently choosing one of the entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    entries: Vec<FolderEntry>,
}

impl Program {
    pub fn new(entries: Vec<FolderEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[FolderEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries claiming `ordinal`.
    pub fn entries_with(&self, ordinal: Ordinal) -> impl Iterator<Item = &FolderEntry> {
        self.entries.iter().filter(move |e| e.ordinal == ordinal)
    }

    /// Distinct ordinals in ascending numeric order.
    pub fn ordinals(&self) -> Vec<Ordinal> {
        let mut ordinals: Vec<Ordinal> = self.entries.iter().map(|e| e.ordinal).collect();
        ordinals.sort_unstable();
        ordinals.dedup();
        ordinals
    }

    /// Distinct ordinals no greater than `max`, ascending.
    pub fn available_ordinals(&self, max: Ordinal) -> Vec<Ordinal> {
        self.ordinals().into_iter().filter(|o| *o <= max).collect()
    }
}

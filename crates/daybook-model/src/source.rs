//! Storage-facing collaborator.

use crate::fragment::{FragmentId, TextFragment};
use crate::program::Program;

/// Yields program snapshots and raw fragment bytes.
///
/// Implementations own all blocking I/O. The engine only ever sees the
/// values returned here and never writes back.
pub trait ContentSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Take a snapshot of every day folder.
    fn list_program(&self) -> Result<Program, Self::Error>;

    /// Read the raw bytes of one fragment.
    fn read_fragment(&self, id: &FragmentId) -> Result<TextFragment, Self::Error>;
}

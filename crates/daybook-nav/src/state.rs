//! Neighbour resolution over a program snapshot.

use daybook_model::{FolderEntry, Ordinal, Program};
use tracing::debug;

use crate::error::{NavigationError, Result};

/// Where a folder sits in its program. Borrowed from one snapshot and
/// recomputed for every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState<'a> {
    pub previous: Option<&'a FolderEntry>,
    pub current: &'a FolderEntry,
    pub next: Option<&'a FolderEntry>,
    /// One-based position among the program's distinct ordinals.
    pub position: usize,
    pub total: usize,
}

impl NavigationState<'_> {
    pub fn is_first(&self) -> bool {
        self.previous.is_none()
    }

    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}

/// Find `ordinal` and its nearest lower and higher neighbours.
///
/// Ordering is numeric and never wraps around. An ordinal claimed by more
/// than one folder is an error when it is the target or one of the chosen
/// neighbours; collisions elsewhere do not affect this folder.
pub fn resolve(program: &Program, ordinal: Ordinal) -> Result<NavigationState<'_>> {
    let ordinals = program.ordinals();
    let index = ordinals
        .binary_search(&ordinal)
        .map_err(|_| NavigationError::UnknownOrdinal { ordinal })?;

    let current = unique_entry(program, ordinal)?;
    let previous = index
        .checked_sub(1)
        .map(|i| unique_entry(program, ordinals[i]))
        .transpose()?;
    let next = ordinals
        .get(index + 1)
        .map(|o| unique_entry(program, *o))
        .transpose()?;

    debug!(
        ordinal = %ordinal,
        previous = ?previous.map(|e| e.ordinal.get()),
        next = ?next.map(|e| e.ordinal.get()),
        "resolved navigation"
    );
    Ok(NavigationState {
        previous,
        current,
        next,
        position: index + 1,
        total: ordinals.len(),
    })
}

fn unique_entry(program: &Program, ordinal: Ordinal) -> Result<&FolderEntry> {
    let mut matches = program.entries_with(ordinal);
    let first = matches
        .next()
        .ok_or(NavigationError::UnknownOrdinal { ordinal })?;
    let others: Vec<&FolderEntry> = matches.collect();
    if others.is_empty() {
        return Ok(first);
    }
    Err(NavigationError::DuplicateOrdinal {
        ordinal,
        folders: std::iter::once(first)
            .chain(others)
            .map(|e| e.name.clone())
            .collect(),
    })
}

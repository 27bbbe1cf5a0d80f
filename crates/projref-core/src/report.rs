//! Reconciliation report

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Drift found for one descriptor. Built once per scan and never mutated
/// after construction.
///
/// Ordering: the two disk-side lists follow filesystem discovery order, the
/// two reference-side lists follow the descriptor's insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// The descriptor this report covers
    pub descriptor: PathBuf,
    /// Files on disk the descriptor never references
    pub missing_from_descriptor: Vec<PathBuf>,
    /// Root-most directories containing no referenced file
    pub suspect_directories: Vec<PathBuf>,
    /// References with no backing file
    pub missing_from_disk: Vec<PathBuf>,
    /// References declared more than once
    pub duplicate_references: Vec<PathBuf>,
}

impl Report {
    /// True when the scan found no drift at all.
    pub fn is_clean(&self) -> bool {
        self.missing_from_descriptor.is_empty()
            && self.suspect_directories.is_empty()
            && self.missing_from_disk.is_empty()
            && self.duplicate_references.is_empty()
    }
}

//! Descriptor reference extraction and reconciliation
//!
//! Audits a project descriptor file against the directory tree that backs it.
//! Extraction builds an immutable reference index from the descriptor;
//! reconciliation classifies every real file against that index and reports
//! four kinds of drift: files the descriptor never mentions, references with
//! no backing file, wholly unreferenced directories, and duplicate
//! references.

pub mod descriptor;
pub mod error;
pub mod ignore;
pub mod reconcile;
pub mod report;

pub use descriptor::{ReferenceIndex, extract};
pub use error::{Error, Result};
pub use ignore::{IgnoreSet, load_sidecar};
pub use reconcile::{reconcile, scan_descriptor};
pub use report::Report;

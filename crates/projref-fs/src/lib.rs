//! Filesystem layer for the project reference auditor
//!
//! Provides recursive file enumeration, lexical path normalization, and
//! pluggable path-casing correction.

pub mod casing;
pub mod error;
pub mod path;
pub mod walk;

pub use casing::{CasingStrategy, DirectoryProbe, Passthrough};
pub use error::{Error, Result};
pub use path::{absolutize, ancestors_below, canonical};
pub use walk::walk_files;

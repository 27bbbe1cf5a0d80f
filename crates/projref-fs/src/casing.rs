//! Path-casing correction against the live filesystem
//!
//! On case-insensitive filesystems a hand-edited descriptor entry can
//! disagree with the on-disk casing of the file it names. Rewriting each
//! component to the real entry name keeps later path comparisons exact.
//! Case-sensitive targets get the same outcome for free, so they can plug in
//! the no-op strategy.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Strategy for reconciling a path's casing with the filesystem.
pub trait CasingStrategy {
    /// Return `path` rewritten to on-disk casing, or unchanged when the
    /// target does not exist. Best-effort normalization, not validation.
    fn correct(&self, path: &Path) -> PathBuf;
}

/// No-op strategy for case-sensitive targets.
#[derive(Debug, Default, Clone, Copy)]
pub struct Passthrough;

impl CasingStrategy for Passthrough {
    fn correct(&self, path: &Path) -> PathBuf {
        path.to_path_buf()
    }
}

/// Corrects casing component-by-component against live directory listings.
#[derive(Debug, Default, Clone, Copy)]
pub struct DirectoryProbe;

impl CasingStrategy for DirectoryProbe {
    fn correct(&self, path: &Path) -> PathBuf {
        if !path.exists() {
            return path.to_path_buf();
        }

        let mut corrected = PathBuf::new();
        for component in path.components() {
            match component {
                Component::Normal(name) => match resolve_component(&corrected, name) {
                    Some(real) => corrected.push(real),
                    None => corrected.push(name),
                },
                other => corrected.push(other.as_os_str()),
            }
        }
        corrected
    }
}

/// Find the entry of `dir` whose name matches `name` ignoring ASCII case,
/// returning the on-disk spelling.
fn resolve_component(dir: &Path, name: &OsStr) -> Option<OsString> {
    let wanted = name.to_str()?;
    for entry in fs::read_dir(dir).ok()?.flatten() {
        let candidate = entry.file_name();
        if candidate
            .to_str()
            .is_some_and(|c| c.eq_ignore_ascii_case(wanted))
        {
            return Some(candidate);
        }
    }
    None
}

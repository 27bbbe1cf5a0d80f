//! Lexical path resolution helpers
//!
//! Descriptor entries are resolved against the descriptor's directory without
//! touching the filesystem; `.` and `..` components are folded here so a
//! reference to a nonexistent file still has one canonical spelling.

use std::path::{Component, Path, PathBuf};

use crate::{Error, Result};

/// Resolve `relative` (which may use backslash separators) against `base` and
/// fold `.`/`..` components lexically.
pub fn absolutize(base: &Path, relative: &str) -> PathBuf {
    lexical_normalize(&base.join(relative.replace('\\', "/")))
}

/// Fold `.` and `..` components without consulting the filesystem.
/// A `..` that would climb past the root is dropped.
pub fn lexical_normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Absolute form of `path` with symlinks resolved. Goes through dunce so
/// Windows results stay in drive-letter form rather than `\\?\` form.
pub fn canonical(path: &Path) -> Result<PathBuf> {
    dunce::canonicalize(path).map_err(|e| Error::io(path, e))
}

/// Ancestor directories of `path`, nearest first, up to but excluding `root`.
///
/// A path outside `root` never meets it, so the iterator then runs all the
/// way up to the filesystem root.
pub fn ancestors_below<'a>(
    root: &'a Path,
    path: &'a Path,
) -> impl Iterator<Item = &'a Path> + 'a {
    path.ancestors().skip(1).take_while(move |dir| *dir != root)
}

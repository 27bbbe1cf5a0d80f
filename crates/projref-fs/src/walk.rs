//! Recursive file enumeration

use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Collect every file under `root` recursively, in filesystem enumeration
/// order. Directories themselves are not returned.
///
/// Any I/O failure aborts the walk: a partial listing must never reach the
/// reconciler, where it would promote directories from incomplete evidence.
pub fn walk_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect(root, &mut files)?;
    tracing::debug!(root = %root.display(), count = files.len(), "enumerated files");
    Ok(files)
}

fn collect(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| Error::io(&path, e))?;
        if file_type.is_dir() {
            collect(&path, files)?;
        } else {
            files.push(path);
        }
    }
    Ok(())
}

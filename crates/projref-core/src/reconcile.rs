//! Reconciliation of the reference index against the live tree

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use projref_fs::{CasingStrategy, ancestors_below, canonical, walk_files};

use crate::descriptor::{self, ReferenceIndex, extension_of};
use crate::ignore::{IgnoreSet, load_sidecar};
use crate::report::Report;
use crate::Result;

/// Scan one descriptor end to end: sidecar ignore rules, extraction, tree
/// walk, reconciliation. `patterns` are unioned with the sidecar file.
pub fn scan_descriptor(
    descriptor: &Path,
    patterns: &[String],
    casing: &dyn CasingStrategy,
) -> Result<Report> {
    let descriptor = canonical(descriptor)?;

    let mut all_patterns = load_sidecar(&descriptor)?;
    all_patterns.extend(patterns.iter().cloned());
    let ignore = IgnoreSet::compile(&all_patterns)?;

    let index = descriptor::extract(&descriptor, casing)?;
    let files = walk_files(index.root())?;
    Ok(reconcile(&descriptor, &index, &files, &ignore))
}

/// Classify every path in `files` against the index. Single pass; each file
/// whose extension the descriptor expects lands in exactly one bucket.
///
/// Unmatched references are computed as an explicit set difference (entries
/// minus the matched set) rather than by draining the index, so the index
/// itself stays immutable.
pub fn reconcile(
    descriptor: &Path,
    index: &ReferenceIndex,
    files: &[PathBuf],
    ignore: &IgnoreSet,
) -> Report {
    let root = index.root();
    let mut matched: HashSet<&Path> = HashSet::new();
    let mut not_in_descriptor: Vec<PathBuf> = Vec::new();
    let mut suspects: Vec<PathBuf> = Vec::new();
    let mut suspect_seen: HashSet<PathBuf> = HashSet::new();

    for file in files {
        if index.contains(file) {
            matched.insert(file.as_path());
            continue;
        }
        // Files of a type the descriptor never references are invisible.
        if !index.expects_extension(&extension_of(file)) {
            continue;
        }
        if file.parent().is_some_and(|dir| index.covers(dir)) {
            // The directory holds referenced files, so this one was likely
            // forgotten rather than intentionally left out.
            not_in_descriptor.push(file.clone());
            continue;
        }
        // The whole directory is unexplained. Promote to the root-most
        // uncovered ancestor so a stray subtree is reported once instead of
        // once per nested directory.
        let mut last_uncovered: Option<&Path> = None;
        let mut reached_covered = false;
        for dir in ancestors_below(root, file) {
            if index.covers(dir) {
                reached_covered = true;
                break;
            }
            last_uncovered = Some(dir);
        }
        if reached_covered
            && let Some(dir) = last_uncovered
            && suspect_seen.insert(dir.to_path_buf())
        {
            suspects.push(dir.to_path_buf());
        }
    }

    let missing_from_disk: Vec<PathBuf> = index
        .entries()
        .iter()
        .filter(|entry| !matched.contains(entry.as_path()))
        .cloned()
        .collect();

    // Ignore rules silence disk-side findings only; a dangling or duplicate
    // reference is always worth reporting.
    not_in_descriptor.retain(|path| !ignore.is_ignored(&suffix_of(root, path)));
    suspects.retain(|path| !ignore.is_ignored(&suffix_of(root, path)));

    tracing::debug!(
        descriptor = %descriptor.display(),
        not_in_descriptor = not_in_descriptor.len(),
        suspect_directories = suspects.len(),
        missing_from_disk = missing_from_disk.len(),
        duplicates = index.duplicates().len(),
        "reconciled"
    );

    Report {
        descriptor: descriptor.to_path_buf(),
        missing_from_descriptor: not_in_descriptor,
        suspect_directories: suspects,
        missing_from_disk,
        duplicate_references: index.duplicates().to_vec(),
    }
}

/// Path suffix relative to the descriptor's directory, leading separator
/// included. Ignore rules match against this form.
fn suffix_of(root: &Path, path: &Path) -> String {
    let root_str = root.to_string_lossy();
    let path_str = path.to_string_lossy();
    match path_str.strip_prefix(root_str.as_ref()) {
        Some(suffix) => suffix.to_owned(),
        None => path_str.into_owned(),
    }
}

//! Reference extraction from project descriptors
//!
//! A descriptor is an MSBuild-style XML document. Reference entries come
//! from `Content`, `None`, and `Compile` elements carrying an `Include`
//! attribute; every other element is ignored.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use projref_fs::{CasingStrategy, absolutize, ancestors_below};

use crate::{Error, Result};

/// Element names whose `Include` attribute declares a file reference.
const INCLUDE_ELEMENTS: [&str; 3] = ["Content", "None", "Compile"];

/// Everything extracted from one descriptor: the expected reference set in
/// insertion order, duplicates, the extension filter, and the set of
/// directories known to contain referenced files.
#[derive(Debug)]
pub struct ReferenceIndex {
    root: PathBuf,
    entries: Vec<PathBuf>,
    seen: HashSet<PathBuf>,
    duplicates: Vec<PathBuf>,
    extensions: HashSet<Option<String>>,
    covered_dirs: HashSet<PathBuf>,
}

impl ReferenceIndex {
    fn new(root: PathBuf) -> Self {
        Self {
            root,
            entries: Vec::new(),
            seen: HashSet::new(),
            duplicates: Vec::new(),
            extensions: HashSet::new(),
            covered_dirs: HashSet::new(),
        }
    }

    /// The descriptor's directory; every classification is relative to it.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// References in insertion order.
    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    /// Paths referenced more than once, in first-detection order.
    pub fn duplicates(&self) -> &[PathBuf] {
        &self.duplicates
    }

    /// Whether `path` is one of the declared references.
    pub fn contains(&self, path: &Path) -> bool {
        self.seen.contains(path)
    }

    /// Whether files of `extension` are the descriptor's business at all.
    pub fn expects_extension(&self, extension: &Option<String>) -> bool {
        self.extensions.contains(extension)
    }

    /// Whether `dir` contains at least one referenced file.
    pub fn covers(&self, dir: &Path) -> bool {
        self.covered_dirs.contains(dir)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, path: PathBuf) {
        if self.seen.contains(&path) {
            if !self.duplicates.contains(&path) {
                self.duplicates.push(path);
            }
            return;
        }
        self.extensions.insert(extension_of(&path));
        for dir in ancestors_below(&self.root, &path) {
            self.covered_dirs.insert(dir.to_path_buf());
        }
        self.seen.insert(path.clone());
        self.entries.push(path);
    }
}

/// Extract the reference index from the descriptor at `descriptor`.
///
/// Each `Include` value is resolved against the descriptor's directory and
/// case-corrected through `casing` so set membership tests against real
/// paths stay exact. A descriptor with no recognized reference elements
/// yields an empty index and the downstream scan reports nothing.
pub fn extract(descriptor: &Path, casing: &dyn CasingStrategy) -> Result<ReferenceIndex> {
    let root = descriptor
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    let text = fs::read_to_string(descriptor).map_err(|e| Error::read(descriptor, e))?;
    let doc = roxmltree::Document::parse(&text)
        .map_err(|e| Error::parse(descriptor, e.to_string()))?;

    let mut index = ReferenceIndex::new(root);
    for node in doc.descendants() {
        if !node.is_element() || !INCLUDE_ELEMENTS.contains(&node.tag_name().name()) {
            continue;
        }
        let Some(include) = node.attribute("Include") else {
            continue;
        };
        let resolved = casing.correct(&absolutize(&index.root, include));
        index.insert(resolved);
    }

    tracing::debug!(
        descriptor = %descriptor.display(),
        entries = index.entries.len(),
        duplicates = index.duplicates.len(),
        "extracted references"
    );
    Ok(index)
}

/// File extension as stored in the extension set (`None` when absent).
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension().map(|e| e.to_string_lossy().into_owned())
}

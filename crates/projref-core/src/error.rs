//! Error types for projref-core

use std::path::PathBuf;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can fail a single descriptor's scan
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Tree walk or path canonicalization failure
    #[error(transparent)]
    Fs(#[from] projref_fs::Error),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse descriptor {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Invalid ignore pattern '{pattern}': {message}")]
    IgnorePattern { pattern: String, message: String },
}

impl Error {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }
}

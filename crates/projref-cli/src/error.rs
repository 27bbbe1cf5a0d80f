//! Error types for projref-cli

use std::path::PathBuf;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from projref-fs
    #[error(transparent)]
    Fs(#[from] projref_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Positional argument that names no existing file or directory
    #[error("Unexpected argument: {}", path.display())]
    UnexpectedArgument { path: PathBuf },

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }

    pub fn unexpected_argument(path: impl Into<PathBuf>) -> Self {
        Self::UnexpectedArgument { path: path.into() }
    }
}

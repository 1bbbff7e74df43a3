//! Error types for routekit-fs

use std::path::PathBuf;

/// Result type for routekit-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in routekit-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Package manifest not found at {path}")]
    ManifestNotFound { path: PathBuf },

    #[error("Failed to parse package manifest at {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    #[error("Command failed: {command}")]
    CommandFailed { command: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

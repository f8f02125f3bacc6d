use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors surfaced by file-touching logger operations.
///
/// Flush, single-line writes and file clearing all return this type. A failed
/// flush leaves the message cache untouched so the caller can retry or switch
/// the target path before any line is lost.
#[derive(Debug, Error)]
pub enum LogError {
    /// The log file could not be opened or written.
    #[error("failed to write log file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configured log file path is empty. Detected at the point of use
    /// (start/flush/clear), never eagerly.
    #[error("invalid log file path {path:?}")]
    InvalidPath { path: PathBuf },
}

impl LogError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        LogError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, LogError>;

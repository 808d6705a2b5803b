//! Error types raised by the JSON file backend.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Convenient result alias returning [`FileStoreError`] failures.
pub type FileStoreResult<T> = Result<T, FileStoreError>;

/// Failures that can occur while reading or replacing the document file.
#[derive(Debug, Error)]
pub enum FileStoreError {
    /// Checking whether the document exists failed (permissions, broken mount, ...).
    #[error("failed to inspect `{path}`")]
    Inspect {
        /// Path that could not be inspected.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The document file could not be read.
    #[error("failed to read `{path}`")]
    Read {
        /// Document path that failed to read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// Creating or filling the staging file failed.
    #[error("failed to write `{path}`")]
    Write {
        /// Staging file or directory being written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The blocking write task panicked or was cancelled.
    #[error("scoreboard write task did not complete")]
    Join {
        /// Failure reported by the blocking task pool.
        #[source]
        source: tokio::task::JoinError,
    },
    /// Moving the temporary file over the document failed.
    #[error("failed to replace `{path}`")]
    Replace {
        /// Document path being replaced.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// Encoding the document as JSON failed.
    #[error("failed to serialize scoreboard document")]
    Serialize {
        /// Encoder failure.
        #[source]
        source: serde_json::Error,
    },
}

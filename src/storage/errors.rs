//! Persistence errors
//!
//! Error codes:
//! - PRIMDB_CORRUPT_DATA
//! - PRIMDB_STORAGE_IO
//! - PRIMDB_STORAGE_SERIALIZE

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("corrupt data file {}: {reason}", path.display())]
    CorruptData { path: PathBuf, reason: String },

    #[error("{context} ({}): {source}", path.display())]
    Io {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize {what}: {source}")]
    Serialize {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl StorageError {
    pub(crate) fn io(context: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        StorageError::Io {
            context,
            path: path.into(),
            source,
        }
    }

    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            StorageError::CorruptData { .. } => "PRIMDB_CORRUPT_DATA",
            StorageError::Io { .. } => "PRIMDB_STORAGE_IO",
            StorageError::Serialize { .. } => "PRIMDB_STORAGE_SERIALIZE",
        }
    }
}

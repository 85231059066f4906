use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading records from the backing store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read (missing, permissions, ...)
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file contents are not a JSON array of records
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Short identifier used in structured log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::Read { .. } => "read_error",
            StoreError::Parse { .. } => "parse_error",
        }
    }
}

//! JSON file backed record source.
//!
//! The file is read and parsed on every call, so edits to it are visible to
//! the next request without a restart.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::error::StoreError;
use crate::record::Record;

use super::RecordSource;

/// Record source reading a JSON array of records from a local file.
///
/// # Example
///
/// ```ignore
/// use record_server::store::{FileRecordStore, RecordSource};
///
/// let store = FileRecordStore::new("user.json");
/// let records = store.load_all().await?;
/// ```
#[derive(Debug, Clone)]
pub struct FileRecordStore {
    path: PathBuf,
}

impl FileRecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RecordSource for FileRecordStore {
    async fn load_all(&self) -> Result<Vec<Record>, StoreError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| StoreError::Read {
                path: self.path.clone(),
                source,
            })?;

        let records: Vec<Record> =
            serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;

        debug!(
            path = %self.path.display(),
            count = records.len(),
            "Loaded records"
        );

        Ok(records)
    }
}

//! Record storage layer.
//!
//! Handlers never touch the filesystem directly; they go through the
//! [`RecordSource`] trait:
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             HTTP handlers               │
//! └────────────────────┬────────────────────┘
//!                      │ load_all()
//!                      ▼
//! ┌─────────────────────────────────────────┐
//! │          RecordSource Trait             │
//! └────────────────────┬────────────────────┘
//!                      │
//!                      ▼
//! ┌─────────────────────────────────────────┐
//! │           FileRecordStore               │
//! │   (re-reads the JSON file every call)   │
//! └─────────────────────────────────────────┘
//! ```

mod file_source;

pub use file_source::FileRecordStore;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::record::Record;

/// Trait for loading the full record collection.
///
/// Implementations return records in their stored order. Callers hold the
/// result only for the duration of one request.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Load every record.
    ///
    /// A failure covers the whole collection; no partial results are returned.
    async fn load_all(&self) -> Result<Vec<Record>, StoreError>;
}

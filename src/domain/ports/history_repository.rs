//! HistoryRepository port
//!
//! Persists print history between process runs.

use std::path::PathBuf;

use crate::domain::entities::HistoryRecord;

pub trait HistoryRepository: Send + Sync {
    /// Stored records, oldest first
    fn load(&self) -> Result<Vec<HistoryRecord>, HistoryError>;

    /// Append one record, keeping at most `limit` (oldest dropped)
    fn append(&self, record: &HistoryRecord, limit: usize) -> Result<(), HistoryError>;

    fn clear(&self) -> Result<(), HistoryError>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("failed to access history: {message}")]
    AccessError { message: String },

    #[error("failed to serialize history: {message}")]
    SerializationError { message: String },

    #[error("history file corrupted: {path}: {message}")]
    Corrupted { path: PathBuf, message: String },
}

//! Error types for printwatch
//!
//! Library code returns `PrintwatchResult`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{HistoryError, PrintSystemError};

/// Result type alias for printwatch operations
pub type PrintwatchResult<T> = Result<T, PrintwatchError>;

/// Main error type for printwatch operations
#[derive(Error, Debug)]
pub enum PrintwatchError {
    /// Target document does not exist
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Requested printer is not in the enumerated printer set
    #[error("printer not found: {name}")]
    PrinterUnavailable { name: String },

    /// Raw job start/write/end failed against the device
    #[error("device write failed on '{printer}': {message}")]
    DeviceWriteFailure { printer: String, message: String },

    /// The OS print verb failed
    #[error("print command failed for {path}: {message}")]
    PrintVerbFailure { path: PathBuf, message: String },

    /// Document metadata could not be extracted (non-fatal)
    #[error("could not parse {path}: {message}")]
    ParseFailure { path: PathBuf, message: String },

    /// Print subsystem failure outside a dispatch (enumeration, defaults)
    #[error(transparent)]
    PrintSystem(#[from] PrintSystemError),

    /// History persistence failure
    #[error(transparent)]
    History(#[from] HistoryError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

//! printwatch - folder watcher and print dispatcher
//!
//! Watches folders for newly arrived documents (for example files saved by
//! a messaging client) and sends them to a local printer, keeping a capped
//! history of outcomes.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    document_info, DocumentInfo, FolderWatcher, PrintDispatcher, WatchConfig, WatchEvent,
};
pub use config::Config;
pub use domain::entities::{HistoryRecord, PrintSettings};
pub use domain::ports::{PrintEvent, PrintEventSink, PrintSystem};
pub use error::{PrintwatchError, PrintwatchResult};

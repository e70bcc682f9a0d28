//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, value objects, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `FolderWatcher` - Reports newly arrived, fully written documents
//! - `PrintDispatcher` - Routes a document to a print strategy and records the outcome
//! - `document_info` - Best-effort document metadata

pub mod dispatch;
pub mod document_info;
pub mod watch;

pub use dispatch::{DefaultPrinterGuard, PrintDispatcher};
pub use document_info::{document_info, DocumentInfo};
pub use watch::{FolderWatcher, StabilityPolicy, WatchConfig, WatchEvent};

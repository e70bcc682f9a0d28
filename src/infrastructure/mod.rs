//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `printing/` - Print systems (CUPS, in-memory)
//! - `history/` - History repository (JSON file)
//! - `events/` - Print event sinks (console, NDJSON)

pub mod events;
pub mod history;
pub mod printing;

// Re-export for convenience
pub use events::{ConsoleEventSink, JsonEventSink};
pub use history::JsonHistoryStore;
pub use printing::{CupsPrintSystem, MemoryPrintSystem};

//! Event sink implementations
//!
//! - `ConsoleEventSink` - human-readable lines
//! - `JsonEventSink` - NDJSON stream

mod console;
mod json;

pub use console::{render_print_event, ConsoleEventSink};
pub use json::JsonEventSink;

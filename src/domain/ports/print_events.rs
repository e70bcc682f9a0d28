//! Print Event Port
//!
//! Observable interface for print dispatch, consumed by whatever hosts the
//! dispatcher (console output, NDJSON stream, tests).

use std::path::PathBuf;

use serde::Serialize;

/// Event emitted by the dispatcher for each print request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PrintEvent {
    /// Dispatch is about to begin
    PrintStarted { path: PathBuf, printer: String },

    /// Dispatch finished
    PrintCompleted { path: PathBuf, success: bool },

    /// Dispatch failed
    PrintError { path: PathBuf, message: String },
}

impl PrintEvent {
    pub fn path(&self) -> &PathBuf {
        match self {
            PrintEvent::PrintStarted { path, .. }
            | PrintEvent::PrintCompleted { path, .. }
            | PrintEvent::PrintError { path, .. } => path,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Trait for receiving print events
pub trait PrintEventSink: Send + Sync {
    fn on_event(&self, event: PrintEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl PrintEventSink for NoopEventSink {
    fn on_event(&self, _event: PrintEvent) {}
}

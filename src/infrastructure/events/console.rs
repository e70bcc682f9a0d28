//! Console Event Sink
//!
//! Human-readable, one line per print event. Errors go to stderr.

use std::path::Path;

use chrono::Local;

use crate::domain::ports::{PrintEvent, PrintEventSink};

#[derive(Debug, Default)]
pub struct ConsoleEventSink;

impl ConsoleEventSink {
    pub fn new() -> Self {
        Self
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Render an event without the timestamp prefix
pub fn render_print_event(event: &PrintEvent) -> String {
    match event {
        PrintEvent::PrintStarted { path, printer } => {
            format!("printing {} on {}", file_name(path), printer)
        }
        PrintEvent::PrintCompleted { path, success: true } => {
            format!("printed {}", file_name(path))
        }
        PrintEvent::PrintCompleted {
            path,
            success: false,
        } => format!("print failed: {}", file_name(path)),
        PrintEvent::PrintError { path, message } => {
            format!("print failed: {}: {}", file_name(path), message)
        }
    }
}

impl PrintEventSink for ConsoleEventSink {
    fn on_event(&self, event: PrintEvent) {
        let stamp = Local::now().format("%H:%M:%S");
        let line = render_print_event(&event);
        match event {
            PrintEvent::PrintError { .. } | PrintEvent::PrintCompleted { success: false, .. } => {
                eprintln!("[{stamp}] {line}")
            }
            _ => println!("[{stamp}] {line}"),
        }
    }
}

//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::PrintDispatcher;
use crate::config::{default_history_path, Config};
use crate::domain::ports::{PrintEventSink, PrintSystem};
use crate::infrastructure::{
    ConsoleEventSink, CupsPrintSystem, JsonEventSink, JsonHistoryStore, MemoryPrintSystem,
};

/// Type alias for the dispatcher used by the CLI
pub type ConcreteDispatcher = PrintDispatcher<Box<dyn PrintSystem>>;

/// Printer name the dry-run system reports when none is configured
pub const DRY_RUN_PRINTER: &str = "dry-run";

/// CUPS, or an in-memory system when `dry_run` is set
///
/// The dry-run system knows the configured default printer plus any
/// `extra_printers`, so lookups behave as they would against real queues.
pub fn create_print_system(
    config: &Config,
    dry_run: bool,
    extra_printers: &[&str],
) -> Box<dyn PrintSystem> {
    if !dry_run {
        return Box::new(CupsPrintSystem::new());
    }

    let default = Some(config.default_printer.trim())
        .filter(|p| !p.is_empty())
        .unwrap_or(DRY_RUN_PRINTER);
    let mut system = MemoryPrintSystem::new().with_default_printer(default);
    for name in extra_printers {
        let name = name.trim();
        if !name.is_empty() && name != default {
            system = system.with_printer(name);
        }
    }
    Box::new(system)
}

/// NDJSON on stdout, or human-readable lines
pub fn create_event_sink(json: bool) -> Arc<dyn PrintEventSink> {
    if json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::new())
    }
}

/// Dispatcher with config defaults, persisted history and the given sink
pub fn create_dispatcher(
    config: &Config,
    system: Box<dyn PrintSystem>,
    sink: Arc<dyn PrintEventSink>,
) -> ConcreteDispatcher {
    PrintDispatcher::from_config(system, config)
        .with_event_sink(sink)
        .with_history_store(Box::new(JsonHistoryStore::with_path(history_path())))
}

/// History file location
pub fn history_path() -> PathBuf {
    default_history_path()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dry_run_uses_configured_default_printer() {
        let config = Config {
            default_printer: "Office".to_string(),
            ..Config::default()
        };
        let system = create_print_system(&config, true, &["Label"]);

        assert_eq!(system.default_printer().unwrap().as_deref(), Some("Office"));
        assert!(system.has_printer("Label").unwrap());
        assert!(!system.has_printer("Other").unwrap());
    }

    #[test]
    fn dry_run_without_configured_printer_has_placeholder() {
        let system = create_print_system(&Config::default(), true, &[]);
        assert_eq!(
            system.default_printer().unwrap().as_deref(),
            Some(DRY_RUN_PRINTER)
        );
    }
}

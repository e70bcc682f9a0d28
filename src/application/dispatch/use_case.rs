//! Print Dispatcher
//!
//! Resolves settings, classifies the document, runs the matching handler
//! and appends one history record per request.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::config::Config;
use crate::domain::entities::{HistoryRecord, PrintDefaults, PrintHistory, PrintSettings};
use crate::domain::ports::{
    HistoryRepository, NoopEventSink, PrintEvent, PrintEventSink, PrintSystem, PrinterInfo,
};
use crate::domain::value_objects::{DocumentKind, PaperSize};
use crate::error::{PrintwatchError, PrintwatchResult};

/// Shown in errors when neither settings nor the system name a printer
const NO_PRINTER: &str = "<system default>";

/// Print dispatcher - the single entry point for printing a document
///
/// Parameterized by its print system so tests run against
/// `MemoryPrintSystem`.
pub struct PrintDispatcher<P: PrintSystem> {
    pub(super) system: P,
    defaults: PrintDefaults,
    history: Mutex<PrintHistory>,
    store: Option<Box<dyn HistoryRepository>>,
    sink: Arc<dyn PrintEventSink>,
    /// Serializes default-printer swaps
    pub(super) print_lock: Mutex<()>,
}

impl<P: PrintSystem> PrintDispatcher<P> {
    pub fn new(system: P, defaults: PrintDefaults) -> Self {
        Self {
            system,
            defaults,
            history: Mutex::new(PrintHistory::default()),
            store: None,
            sink: Arc::new(NoopEventSink),
            print_lock: Mutex::new(()),
        }
    }

    /// Defaults and history limit taken from the persisted config
    pub fn from_config(system: P, config: &Config) -> Self {
        Self::new(system, config.print_defaults()).with_history_limit(config.history_limit)
    }

    pub fn with_history_limit(self, limit: usize) -> Self {
        lock(&self.history).set_limit(limit);
        self
    }

    pub fn with_event_sink(mut self, sink: Arc<dyn PrintEventSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Persist history through `store`, seeding the in-memory log from it
    pub fn with_history_store(mut self, store: Box<dyn HistoryRepository>) -> Self {
        match store.load() {
            Ok(records) => {
                let mut history = lock(&self.history);
                let limit = history.limit();
                *history = PrintHistory::from_records(records, limit);
            }
            Err(e) => tracing::warn!(error = %e, "could not load print history"),
        }
        self.store = Some(store);
        self
    }

    pub fn defaults(&self) -> &PrintDefaults {
        &self.defaults
    }

    pub fn system(&self) -> &P {
        &self.system
    }

    /// Print `path`, filling unset settings from the defaults.
    ///
    /// Never fails outright: every failure is logged, reported as
    /// `PrintEvent::PrintError` and recorded in history.
    pub fn print_document(&self, path: &Path, settings: &PrintSettings) -> bool {
        let effective = settings.resolve(&self.defaults);

        let printer = match self.resolve_printer(effective.printer.as_deref()) {
            Ok(printer) => printer,
            Err(e) => {
                self.fail(path, "", &e);
                return false;
            }
        };

        self.sink.on_event(PrintEvent::PrintStarted {
            path: path.to_path_buf(),
            printer: printer.clone(),
        });

        let kind = DocumentKind::classify(path);
        tracing::debug!(
            path = %path.display(),
            kind = ?kind,
            printer = %printer,
            copies = effective.copies,
            paper_size = %effective.paper_size,
            duplex = effective.duplex,
            "dispatching"
        );

        let outcome = match kind {
            DocumentKind::Pdf => self.print_pdf(path, &printer, &effective),
            DocumentKind::WordProcessor
            | DocumentKind::Image
            | DocumentKind::Text
            | DocumentKind::Other => self.print_generic(path, &printer, &effective),
        };

        match outcome {
            Ok(()) => {
                tracing::info!(path = %path.display(), printer = %printer, "printed");
                self.sink.on_event(PrintEvent::PrintCompleted {
                    path: path.to_path_buf(),
                    success: true,
                });
                self.record(HistoryRecord::now(path, &printer, true, None));
                true
            }
            Err(e) => {
                self.fail(path, &printer, &e);
                false
            }
        }
    }

    /// History records, oldest first
    pub fn history(&self) -> Vec<HistoryRecord> {
        lock(&self.history).to_vec()
    }

    pub fn clear_history(&self) {
        lock(&self.history).clear();
        if let Some(store) = &self.store {
            if let Err(e) = store.clear() {
                tracing::warn!(error = %e, "could not clear stored history");
            }
        }
    }

    pub fn available_printers(&self) -> PrintwatchResult<Vec<PrinterInfo>> {
        Ok(self.system.printers()?)
    }

    pub fn available_paper_sizes(&self) -> Vec<PaperSize> {
        PaperSize::ALL.to_vec()
    }

    /// Explicit or configured printer, then the OS default
    fn resolve_printer(&self, requested: Option<&str>) -> PrintwatchResult<String> {
        if let Some(name) = requested {
            return Ok(name.to_string());
        }
        self.system
            .default_printer()?
            .ok_or_else(|| PrintwatchError::PrinterUnavailable {
                name: NO_PRINTER.to_string(),
            })
    }

    fn fail(&self, path: &Path, printer: &str, error: &PrintwatchError) {
        let message = error.to_string();
        tracing::error!(path = %path.display(), printer, error = %message, "print failed");
        self.sink.on_event(PrintEvent::PrintError {
            path: path.to_path_buf(),
            message: message.clone(),
        });
        self.record(HistoryRecord::now(path, printer, false, Some(message)));
    }

    fn record(&self, record: HistoryRecord) {
        let limit = {
            let mut history = lock(&self.history);
            history.push(record.clone());
            history.limit()
        };
        if let Some(store) = &self.store {
            if let Err(e) = store.append(&record, limit) {
                tracing::warn!(error = %e, "could not persist history record");
            }
        }
    }
}

/// A poisoned lock only means another print call panicked
pub(super) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

//! In-memory print system
//!
//! Records every raw job, print verb invocation and default-printer change.
//! Used by tests and by `--dry-run`.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::ports::{
    JobOptions, PrintResult, PrintSystem, PrintSystemError, PrintTarget, PrinterHandle,
    PrinterInfo,
};

/// A completed raw job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawJobRecord {
    pub printer: String,
    pub title: String,
    pub data: Vec<u8>,
}

/// One invocation of the print verb
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbCall {
    pub path: PathBuf,
    /// Printer the job actually went to
    pub printer: String,
    pub options: JobOptions,
}

#[derive(Debug, Default)]
struct MemoryState {
    printers: Vec<String>,
    default_printer: Option<String>,
    raw_jobs: Vec<RawJobRecord>,
    raw_attempts: usize,
    verb_calls: Vec<VerbCall>,
    default_changes: Vec<String>,
    fail_raw: bool,
    fail_verb_on_call: Option<usize>,
    fail_set_default_on_call: Option<usize>,
    verb_call_count: usize,
    set_default_count: usize,
}

/// Print system that never touches real hardware
#[derive(Debug)]
pub struct MemoryPrintSystem {
    state: Mutex<MemoryState>,
    targeted: bool,
}

impl Default for MemoryPrintSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryPrintSystem {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MemoryState::default()),
            targeted: true,
        }
    }

    pub fn with_printer(self, name: impl Into<String>) -> Self {
        self.lock().printers.push(name.into());
        self
    }

    /// Register `name` (if needed) and make it the OS default
    pub fn with_default_printer(self, name: impl Into<String>) -> Self {
        let name = name.into();
        {
            let mut state = self.lock();
            if !state.printers.contains(&name) {
                state.printers.push(name.clone());
            }
            state.default_printer = Some(name);
        }
        self
    }

    /// Behave like a host that can only print to the default printer
    pub fn without_targeting(mut self) -> Self {
        self.targeted = false;
        self
    }

    /// Make every raw job start fail
    pub fn failing_raw_jobs(self) -> Self {
        self.lock().fail_raw = true;
        self
    }

    /// Make the `n`th print verb call (1-based) fail
    pub fn failing_verb_on_call(self, n: usize) -> Self {
        self.lock().fail_verb_on_call = Some(n);
        self
    }

    /// Make the `n`th default-printer change (1-based) fail
    pub fn failing_set_default_on_call(self, n: usize) -> Self {
        self.lock().fail_set_default_on_call = Some(n);
        self
    }

    pub fn raw_jobs(&self) -> Vec<RawJobRecord> {
        self.lock().raw_jobs.clone()
    }

    /// Raw jobs started, including ones that failed
    pub fn raw_attempts(&self) -> usize {
        self.lock().raw_attempts
    }

    pub fn verb_calls(&self) -> Vec<VerbCall> {
        self.lock().verb_calls.clone()
    }

    /// Every value the OS default printer was set to, in order
    pub fn default_changes(&self) -> Vec<String> {
        self.lock().default_changes.clone()
    }

    pub fn current_default(&self) -> Option<String> {
        self.lock().default_printer.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        // A panicking test thread must not wedge the others
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl PrintSystem for MemoryPrintSystem {
    fn printers(&self) -> PrintResult<Vec<PrinterInfo>> {
        let state = self.lock();
        Ok(state
            .printers
            .iter()
            .map(|name| PrinterInfo {
                name: name.clone(),
                is_default: state.default_printer.as_deref() == Some(name.as_str()),
            })
            .collect())
    }

    fn default_printer(&self) -> PrintResult<Option<String>> {
        Ok(self.lock().default_printer.clone())
    }

    fn set_default_printer(&self, name: &str) -> PrintResult<()> {
        let mut state = self.lock();
        state.set_default_count += 1;
        if state.fail_set_default_on_call == Some(state.set_default_count) {
            return Err(PrintSystemError::Command {
                command: "set-default".to_string(),
                message: "injected failure".to_string(),
            });
        }
        if !state.printers.iter().any(|p| p == name) {
            return Err(PrintSystemError::PrinterNotFound {
                name: name.to_string(),
            });
        }
        state.default_printer = Some(name.to_string());
        state.default_changes.push(name.to_string());
        Ok(())
    }

    fn open_printer<'a>(&'a self, name: &str) -> PrintResult<Box<dyn PrinterHandle + 'a>> {
        if !self.lock().printers.iter().any(|p| p == name) {
            return Err(PrintSystemError::PrinterNotFound {
                name: name.to_string(),
            });
        }
        Ok(Box::new(MemoryHandle {
            system: self,
            printer: name.to_string(),
            job: None,
        }))
    }

    fn print_file(
        &self,
        path: &Path,
        target: PrintTarget<'_>,
        options: &JobOptions,
    ) -> PrintResult<()> {
        let mut state = self.lock();
        state.verb_call_count += 1;

        let printer = match (target, self.targeted) {
            (PrintTarget::Named(name), true) => Some(name.to_string()),
            _ => state.default_printer.clone(),
        };
        let printer = printer.ok_or_else(|| PrintSystemError::Command {
            command: "print".to_string(),
            message: "no default destination".to_string(),
        })?;

        if !state.printers.contains(&printer) {
            return Err(PrintSystemError::PrinterNotFound { name: printer });
        }
        if state.fail_verb_on_call == Some(state.verb_call_count) {
            return Err(PrintSystemError::Command {
                command: "print".to_string(),
                message: "injected failure".to_string(),
            });
        }
        if !path.exists() {
            return Err(PrintSystemError::Command {
                command: "print".to_string(),
                message: format!("{} does not exist", path.display()),
            });
        }

        state.verb_calls.push(VerbCall {
            path: path.to_path_buf(),
            printer,
            options: options.clone(),
        });
        Ok(())
    }

    fn supports_targeted_print(&self) -> bool {
        self.targeted
    }
}

struct MemoryHandle<'a> {
    system: &'a MemoryPrintSystem,
    printer: String,
    job: Option<RawJobRecord>,
}

impl PrinterHandle for MemoryHandle<'_> {
    fn start_job(&mut self, title: &str) -> PrintResult<()> {
        let mut state = self.system.lock();
        state.raw_attempts += 1;
        if state.fail_raw {
            return Err(PrintSystemError::Device {
                printer: self.printer.clone(),
                message: "injected failure".to_string(),
            });
        }
        self.job = Some(RawJobRecord {
            printer: self.printer.clone(),
            title: title.to_string(),
            data: Vec::new(),
        });
        Ok(())
    }

    fn write(&mut self, data: &[u8]) -> PrintResult<()> {
        match self.job.as_mut() {
            Some(job) => {
                job.data.extend_from_slice(data);
                Ok(())
            }
            None => Err(PrintSystemError::NoOpenJob {
                printer: self.printer.clone(),
            }),
        }
    }

    fn end_job(&mut self) -> PrintResult<()> {
        let job = self.job.take().ok_or_else(|| PrintSystemError::NoOpenJob {
            printer: self.printer.clone(),
        })?;
        self.system.lock().raw_jobs.push(job);
        Ok(())
    }
}

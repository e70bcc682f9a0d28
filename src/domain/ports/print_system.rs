//! PrintSystem port - abstraction over the OS print subsystem
//!
//! Covers what the dispatcher needs from the host: printer enumeration,
//! the OS-wide default printer, raw device jobs and the generic "print"
//! verb.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

/// Result type for print system operations
pub type PrintResult<T> = Result<T, PrintSystemError>;

/// Print system operation errors
#[derive(Debug, thiserror::Error)]
pub enum PrintSystemError {
    #[error("printer not found: {name}")]
    PrinterNotFound { name: String },

    #[error("no job is open on '{printer}'")]
    NoOpenJob { printer: String },

    #[error("device error on '{printer}': {message}")]
    Device { printer: String, message: String },

    #[error("no default printer to restore after printing on '{printer}'")]
    NoDefaultPrinter { printer: String },

    #[error("`{command}` failed: {message}")]
    Command { command: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// An installed printer as reported by the system
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrinterInfo {
    pub name: String,
    pub is_default: bool,
}

/// Which printer a print verb goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintTarget<'a> {
    /// An explicitly named printer
    Named(&'a str),
    /// Whatever the OS default printer currently is
    SystemDefault,
}

/// Job attributes passed to the print verb
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobOptions {
    pub title: String,
    /// IPP `media` keyword, e.g. `iso_a4_210x297mm`
    pub media: Option<String>,
    pub duplex: bool,
}

/// An open printer handle. Closed on drop.
///
/// Jobs follow `start_job` → `write`* → `end_job`.
pub trait PrinterHandle: Send {
    fn start_job(&mut self, title: &str) -> PrintResult<()>;

    fn write(&mut self, data: &[u8]) -> PrintResult<()>;

    fn end_job(&mut self) -> PrintResult<()>;
}

/// Abstract OS print subsystem
///
/// Implementations:
/// - `CupsPrintSystem` - `lpstat` / `lpoptions` / `lp`
/// - `MemoryPrintSystem` - in-memory, for tests and dry runs
pub trait PrintSystem: Send + Sync {
    /// Enumerate installed printers
    fn printers(&self) -> PrintResult<Vec<PrinterInfo>>;

    /// Current OS default printer, if one is set
    fn default_printer(&self) -> PrintResult<Option<String>>;

    /// Change the OS default printer
    fn set_default_printer(&self, name: &str) -> PrintResult<()>;

    /// Open a handle for raw device jobs
    fn open_printer<'a>(&'a self, name: &str) -> PrintResult<Box<dyn PrinterHandle + 'a>>;

    /// Invoke the generic print verb on `path`
    fn print_file(&self, path: &Path, target: PrintTarget<'_>, options: &JobOptions)
        -> PrintResult<()>;

    /// Whether `print_file` honours `PrintTarget::Named`.
    ///
    /// When false, callers must route through the OS default printer.
    fn supports_targeted_print(&self) -> bool;

    /// Whether `name` is currently enumerable
    fn has_printer(&self, name: &str) -> PrintResult<bool> {
        Ok(self.printers()?.iter().any(|p| p.name == name))
    }
}

impl<T: PrintSystem + ?Sized> PrintSystem for Box<T> {
    fn printers(&self) -> PrintResult<Vec<PrinterInfo>> {
        (**self).printers()
    }

    fn default_printer(&self) -> PrintResult<Option<String>> {
        (**self).default_printer()
    }

    fn set_default_printer(&self, name: &str) -> PrintResult<()> {
        (**self).set_default_printer(name)
    }

    fn open_printer<'a>(&'a self, name: &str) -> PrintResult<Box<dyn PrinterHandle + 'a>> {
        (**self).open_printer(name)
    }

    fn print_file(
        &self,
        path: &Path,
        target: PrintTarget<'_>,
        options: &JobOptions,
    ) -> PrintResult<()> {
        (**self).print_file(path, target, options)
    }

    fn supports_targeted_print(&self) -> bool {
        (**self).supports_targeted_print()
    }

    fn has_printer(&self, name: &str) -> PrintResult<bool> {
        (**self).has_printer(name)
    }
}

impl<T: PrintSystem + ?Sized> PrintSystem for Arc<T> {
    fn printers(&self) -> PrintResult<Vec<PrinterInfo>> {
        (**self).printers()
    }

    fn default_printer(&self) -> PrintResult<Option<String>> {
        (**self).default_printer()
    }

    fn set_default_printer(&self, name: &str) -> PrintResult<()> {
        (**self).set_default_printer(name)
    }

    fn open_printer<'a>(&'a self, name: &str) -> PrintResult<Box<dyn PrinterHandle + 'a>> {
        (**self).open_printer(name)
    }

    fn print_file(
        &self,
        path: &Path,
        target: PrintTarget<'_>,
        options: &JobOptions,
    ) -> PrintResult<()> {
        (**self).print_file(path, target, options)
    }

    fn supports_targeted_print(&self) -> bool {
        (**self).supports_targeted_print()
    }

    fn has_printer(&self, name: &str) -> PrintResult<bool> {
        (**self).has_printer(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_printer() {
        let err = PrintSystemError::PrinterNotFound {
            name: "Office".to_string(),
        };
        assert!(err.to_string().contains("Office"));
    }

    #[test]
    fn error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe");
        let err: PrintSystemError = io_err.into();
        assert!(matches!(err, PrintSystemError::Io(_)));
    }
}

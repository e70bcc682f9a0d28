//! Format-specific print strategies

use std::fs;
use std::io;
use std::path::Path;

use crate::application::document_info::count_pdf_pages;
use crate::domain::entities::EffectiveSettings;
use crate::domain::ports::{JobOptions, PrintSystem, PrintSystemError, PrintTarget};
use crate::domain::value_objects::media_for_label;
use crate::error::{PrintwatchError, PrintwatchResult};

use super::swap::DefaultPrinterGuard;
use super::use_case::{lock, PrintDispatcher};

impl<P: PrintSystem> PrintDispatcher<P> {
    /// Raw device write per copy, falling back to the print verb
    pub(super) fn print_pdf(
        &self,
        path: &Path,
        printer: &str,
        settings: &EffectiveSettings,
    ) -> PrintwatchResult<()> {
        let data = fs::read(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => PrintwatchError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => PrintwatchError::Io(e),
        })?;

        match count_pdf_pages(&data) {
            Ok(pages) => tracing::debug!(path = %path.display(), pages, "opened pdf"),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "pdf page count unavailable")
            }
        }

        match self.write_raw(printer, &title_of(path), &data, settings.copies) {
            Ok(()) => Ok(()),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "raw device write failed, falling back to print command"
                );
                self.print_generic(path, printer, settings)
            }
        }
    }

    fn write_raw(
        &self,
        printer: &str,
        title: &str,
        data: &[u8],
        copies: u32,
    ) -> PrintwatchResult<()> {
        let device = |e: PrintSystemError| PrintwatchError::DeviceWriteFailure {
            printer: printer.to_string(),
            message: e.to_string(),
        };

        let mut handle = self.system.open_printer(printer).map_err(device)?;
        for _ in 0..copies {
            handle.start_job(title).map_err(device)?;
            handle.write(data).map_err(device)?;
            handle.end_job().map_err(device)?;
        }
        Ok(())
    }

    /// The OS print verb, issued once per copy
    ///
    /// Both checks run before the OS default printer can be touched.
    pub(super) fn print_generic(
        &self,
        path: &Path,
        printer: &str,
        settings: &EffectiveSettings,
    ) -> PrintwatchResult<()> {
        if !path.exists() {
            return Err(PrintwatchError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        if !self.system.has_printer(printer)? {
            return Err(PrintwatchError::PrinterUnavailable {
                name: printer.to_string(),
            });
        }

        let options = job_options(path, settings);
        let verb = |e: PrintSystemError| match e {
            PrintSystemError::PrinterNotFound { name } => {
                PrintwatchError::PrinterUnavailable { name }
            }
            other => PrintwatchError::PrintVerbFailure {
                path: path.to_path_buf(),
                message: other.to_string(),
            },
        };

        if self.system.supports_targeted_print() {
            for _ in 0..settings.copies {
                self.system
                    .print_file(path, PrintTarget::Named(printer), &options)
                    .map_err(verb)?;
            }
            return Ok(());
        }

        let _serialized = lock(&self.print_lock);
        let _guard = DefaultPrinterGuard::swap(&self.system, printer).map_err(verb)?;
        for _ in 0..settings.copies {
            self.system
                .print_file(path, PrintTarget::SystemDefault, &options)
                .map_err(verb)?;
        }
        Ok(())
    }
}

fn title_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn job_options(path: &Path, settings: &EffectiveSettings) -> JobOptions {
    JobOptions {
        title: title_of(path),
        media: Some(media_for_label(&settings.paper_size)).filter(|m| !m.is_empty()),
        duplex: settings.duplex,
    }
}

//! Temporary OS default printer swap

use crate::domain::ports::{PrintResult, PrintSystem, PrintSystemError};

/// Makes `printer` the OS default for the guard's lifetime.
///
/// The previous default is restored on drop, on success and failure alike.
/// Restore errors are logged, never raised. Without a current default there
/// is nothing to restore, so no swap happens.
pub struct DefaultPrinterGuard<'a, P: PrintSystem + ?Sized> {
    system: &'a P,
    previous: Option<String>,
}

impl<'a, P: PrintSystem + ?Sized> DefaultPrinterGuard<'a, P> {
    pub fn swap(system: &'a P, printer: &str) -> PrintResult<Self> {
        let current = match system.default_printer()? {
            Some(current) if current == printer => {
                return Ok(Self {
                    system,
                    previous: None,
                })
            }
            Some(current) => current,
            None => {
                return Err(PrintSystemError::NoDefaultPrinter {
                    printer: printer.to_string(),
                })
            }
        };

        system.set_default_printer(printer)?;
        tracing::debug!(from = %current, to = printer, "swapped default printer");
        Ok(Self {
            system,
            previous: Some(current),
        })
    }
}

impl<P: PrintSystem + ?Sized> Drop for DefaultPrinterGuard<'_, P> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            match self.system.set_default_printer(&previous) {
                Ok(()) => tracing::debug!(printer = %previous, "restored default printer"),
                Err(e) => tracing::error!(
                    printer = %previous,
                    error = %e,
                    "failed to restore default printer"
                ),
            }
        }
    }
}

//! Print Dispatch Module
//!
//! Routes a document to a format-specific print strategy and records the
//! outcome.
//!
//! ## Structure
//!
//! - `use_case` - `PrintDispatcher`, settings resolution and history
//! - `handlers` - PDF raw-device strategy and the generic print verb
//! - `swap` - `DefaultPrinterGuard` for hosts without targeted printing
//!
//! ## Usage
//!
//! ```ignore
//! let dispatcher = PrintDispatcher::from_config(CupsPrintSystem::new(), &config);
//! let ok = dispatcher.print_document(path, &PrintSettings::new().with_copies(2));
//! ```

mod handlers;
mod swap;
mod use_case;

pub use swap::DefaultPrinterGuard;
pub use use_case::PrintDispatcher;

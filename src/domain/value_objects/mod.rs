//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod document_kind;
mod extension;
mod paper_size;

pub use document_kind::{DocumentKind, IMAGE_EXTENSIONS};
pub use extension::{extension_of, normalize_extension, ExtensionSet};
pub use paper_size::{media_for_label, PaperSize};

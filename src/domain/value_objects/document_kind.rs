//! Document classification by extension

use std::path::Path;

use serde::Serialize;

use super::extension::extension_of;

pub const IMAGE_EXTENSIONS: [&str; 5] = [".jpg", ".jpeg", ".png", ".bmp", ".gif"];

/// Format family of a document; selects the print strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Pdf,
    WordProcessor,
    Image,
    Text,
    Other,
}

impl DocumentKind {
    /// Classify by lowercased extension; first match wins
    pub fn classify(path: &Path) -> Self {
        match extension_of(path).as_deref() {
            Some(".pdf") => DocumentKind::Pdf,
            Some(".docx") => DocumentKind::WordProcessor,
            Some(ext) if IMAGE_EXTENSIONS.contains(&ext) => DocumentKind::Image,
            Some(".txt") => DocumentKind::Text,
            _ => DocumentKind::Other,
        }
    }
}

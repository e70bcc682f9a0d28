//! Paper size labels

use std::fmt;

use serde::{Deserialize, Serialize};

/// Paper sizes offered to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaperSize {
    #[default]
    A4,
    A5,
    Letter,
    Legal,
}

impl PaperSize {
    pub const ALL: [PaperSize; 4] = [
        PaperSize::A4,
        PaperSize::A5,
        PaperSize::Letter,
        PaperSize::Legal,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PaperSize::A4 => "A4",
            PaperSize::A5 => "A5",
            PaperSize::Letter => "Letter",
            PaperSize::Legal => "Legal",
        }
    }

    /// Case-insensitive lookup by label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(label.trim()))
    }

    /// IPP/CUPS `media` keyword
    pub fn media_keyword(&self) -> &'static str {
        match self {
            PaperSize::A4 => "iso_a4_210x297mm",
            PaperSize::A5 => "iso_a5_148x210mm",
            PaperSize::Letter => "na_letter_8.5x11in",
            PaperSize::Legal => "na_legal_8.5x14in",
        }
    }
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Media keyword for an arbitrary paper size label.
///
/// Unknown labels are passed through so the print system can decide.
pub fn media_for_label(label: &str) -> String {
    PaperSize::from_label(label)
        .map(|p| p.media_keyword().to_string())
        .unwrap_or_else(|| label.trim().to_string())
}

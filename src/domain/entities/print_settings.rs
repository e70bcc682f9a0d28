//! Per-request print settings and their resolution against defaults

use serde::{Deserialize, Serialize};

/// Settings supplied with a print request; unset fields use the defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub printer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copies: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duplex: Option<bool>,
}

impl PrintSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_printer(mut self, printer: impl Into<String>) -> Self {
        self.printer = Some(printer.into());
        self
    }

    pub fn with_paper_size(mut self, paper_size: impl Into<String>) -> Self {
        self.paper_size = Some(paper_size.into());
        self
    }

    pub fn with_copies(mut self, copies: u32) -> Self {
        self.copies = Some(copies);
        self
    }

    pub fn with_duplex(mut self, duplex: bool) -> Self {
        self.duplex = Some(duplex);
        self
    }

    /// Fill unset fields from `defaults`.
    ///
    /// `printer` stays `None` when neither side names one; the dispatcher
    /// then asks the print system for its default.
    pub fn resolve(&self, defaults: &PrintDefaults) -> EffectiveSettings {
        let printer = self
            .printer
            .clone()
            .filter(|p| !p.trim().is_empty())
            .or_else(|| defaults.printer.clone().filter(|p| !p.trim().is_empty()));

        EffectiveSettings {
            printer,
            paper_size: self
                .paper_size
                .clone()
                .unwrap_or_else(|| defaults.paper_size.clone()),
            copies: self.copies.unwrap_or(defaults.copies).max(1),
            duplex: self.duplex.unwrap_or(defaults.duplex),
        }
    }
}

/// Process-wide defaults, usually built from the persisted config
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintDefaults {
    pub printer: Option<String>,
    pub paper_size: String,
    pub copies: u32,
    pub duplex: bool,
}

impl Default for PrintDefaults {
    fn default() -> Self {
        Self {
            printer: None,
            paper_size: "A4".to_string(),
            copies: 1,
            duplex: false,
        }
    }
}

/// Settings actually used for a job. `copies` is always >= 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EffectiveSettings {
    pub printer: Option<String>,
    pub paper_size: String,
    pub copies: u32,
    pub duplex: bool,
}

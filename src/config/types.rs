//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::entities::{PrintDefaults, DEFAULT_HISTORY_LIMIT};
use crate::domain::value_objects::ExtensionSet;
use crate::error::PrintwatchResult;

use super::loader::{self, ConfigWarning};

pub const DEFAULT_EXTENSIONS: [&str; 8] = [
    ".pdf", ".docx", ".xlsx", ".pptx", ".jpg", ".jpeg", ".png", ".txt",
];

/// Persisted application configuration
///
/// Every field has a default, so missing keys are backfilled on load.
/// Keys this version does not know are kept in `extra` and written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub watch_folders: Vec<PathBuf>,

    #[serde(default)]
    pub default_printer: String,

    #[serde(default = "default_paper_size")]
    pub default_paper_size: String,

    #[serde(default = "default_copies", deserialize_with = "at_least_one")]
    pub default_copies: u32,

    #[serde(default)]
    pub default_duplex: bool,

    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    #[serde(default = "default_extensions")]
    pub supported_extensions: ExtensionSet,

    #[serde(default)]
    pub auto_print: bool,

    #[serde(default)]
    pub last_directory: String,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            watch_folders: Vec::new(),
            default_printer: String::new(),
            default_paper_size: default_paper_size(),
            default_copies: default_copies(),
            default_duplex: false,
            history_limit: default_history_limit(),
            supported_extensions: default_extensions(),
            auto_print: false,
            last_directory: String::new(),
            extra: serde_json::Map::new(),
        }
    }
}

fn default_paper_size() -> String {
    "A4".to_string()
}

fn default_copies() -> u32 {
    1
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

fn default_extensions() -> ExtensionSet {
    ExtensionSet::new(DEFAULT_EXTENSIONS)
}

/// Accept any integer; anything below 1 becomes 1
fn at_least_one<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    if raw < 1 {
        tracing::warn!(value = raw, "default_copies must be at least 1, using 1");
        return Ok(1);
    }
    Ok(u32::try_from(raw).unwrap_or(u32::MAX))
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> PrintwatchResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> PrintwatchResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from `path`, degrading to defaults on any failure
    pub fn load_or_default(path: &Path) -> Self {
        loader::load_or_default(path)
    }

    /// Apply environment variable overrides (PRINTWATCH_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Write configuration atomically
    pub fn save(&self, path: &Path) -> PrintwatchResult<()> {
        loader::save(self, path)
    }

    /// Defaults used to fill unset print settings
    pub fn print_defaults(&self) -> PrintDefaults {
        PrintDefaults {
            printer: Some(self.default_printer.trim().to_string()).filter(|p| !p.is_empty()),
            paper_size: self.default_paper_size.clone(),
            copies: self.default_copies.max(1),
            duplex: self.default_duplex,
        }
    }

    /// Add a watch folder and remember it as the last used directory.
    ///
    /// Returns false if the folder was already listed.
    pub fn add_watch_folder(&mut self, folder: &Path) -> bool {
        self.last_directory = folder.display().to_string();
        if self.watch_folders.iter().any(|f| f == folder) {
            return false;
        }
        self.watch_folders.push(folder.to_path_buf());
        true
    }

    pub fn remove_watch_folder(&mut self, folder: &Path) -> bool {
        let before = self.watch_folders.len();
        self.watch_folders.retain(|f| f != folder);
        self.watch_folders.len() != before
    }
}

//! Command handlers for the printwatch binary

mod config;
mod history;
mod info;
mod print;
mod printers;
mod watch;

use std::path::{Path, PathBuf};

use printwatch::config::{default_config_path, Config};

pub use config::cmd_config;
pub use history::cmd_history;
pub use info::cmd_info;
pub use print::cmd_print;
pub use printers::cmd_printers;
pub use watch::cmd_watch;

/// Process-wide options shared by every command
#[derive(Debug)]
pub struct Context {
    pub json: bool,
    pub dry_run: bool,
    pub config_path: PathBuf,
    /// Loaded with environment overrides applied
    pub config: Config,
}

impl Context {
    pub fn new(json: bool, dry_run: bool, config_path: Option<PathBuf>) -> Self {
        let config_path = config_path.unwrap_or_else(default_config_path);
        let config = Config::load_or_default(&config_path);
        Self {
            json,
            dry_run,
            config_path,
            config,
        }
    }
}

/// Print one NDJSON line
pub(crate) fn emit_json(value: &serde_json::Value) {
    println!("{value}");
}

pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

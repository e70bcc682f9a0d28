//! Configuration module for printwatch
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PRINTWATCH_*)
//! 3. User config (~/.printwatch/config.json)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{config_dir, default_config_path, default_history_path, ConfigWarning};
pub use types::{Config, DEFAULT_EXTENSIONS};

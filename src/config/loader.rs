//! Configuration loading and persistence

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::PrintwatchResult;

use super::types::Config;

const CONFIG_DIR_NAME: &str = ".printwatch";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PrintwatchResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    let config: Config = serde_json::from_str(&content)?;

    let warnings = config
        .extra
        .keys()
        .map(|key| ConfigWarning {
            key: key.clone(),
            file: path.to_path_buf(),
        })
        .collect();

    Ok((config, warnings))
}

/// Load `path`, falling back to defaults when it is missing or unreadable
pub fn load_or_default(path: &Path) -> Config {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return with_env_overrides(Config::default());
    }

    match load_with_warnings(path) {
        Ok((config, warnings)) => {
            for warning in &warnings {
                tracing::warn!(
                    key = %warning.key,
                    file = %warning.file.display(),
                    "unknown config key (kept as-is)"
                );
            }
            with_env_overrides(config)
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "failed to load config, using defaults"
            );
            with_env_overrides(Config::default())
        }
    }
}

/// Apply environment variable overrides (PRINTWATCH_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    // PRINTWATCH_DEFAULT_PRINTER
    if let Ok(printer) = std::env::var("PRINTWATCH_DEFAULT_PRINTER") {
        config.default_printer = printer;
    }

    // PRINTWATCH_AUTO_PRINT
    if let Ok(val) = std::env::var("PRINTWATCH_AUTO_PRINT") {
        config.auto_print = matches!(val.to_lowercase().as_str(), "1" | "true" | "yes" | "on");
    }

    config
}

/// Write configuration as pretty JSON through a temp file in the same
/// directory, then rename into place
pub fn save(config: &Config, path: &Path) -> PrintwatchResult<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent)?;

    let content = serde_json::to_string_pretty(config)?;
    let mut tmp = tempfile::NamedTempFile::new_in(&parent)?;
    tmp.write_all(content.as_bytes())?;
    tmp.write_all(b"\n")?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// `~/.printwatch`, overridable via `PRINTWATCH_HOME`
pub fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("PRINTWATCH_HOME") {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .map(|h| h.join(CONFIG_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(CONFIG_DIR_NAME))
}

/// Config file path (`PRINTWATCH_CONFIG` wins)
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var("PRINTWATCH_CONFIG") {
        return PathBuf::from(path);
    }
    config_dir().join("config.json")
}

/// History file path (`PRINTWATCH_HISTORY` wins)
pub fn default_history_path() -> PathBuf {
    if let Ok(path) = std::env::var("PRINTWATCH_HISTORY") {
        return PathBuf::from(path);
    }
    config_dir().join("history.json")
}

//! Watch event types and configuration

use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;

use crate::config::Config;
use crate::domain::value_objects::ExtensionSet;

/// Interval between size polls while waiting for a file to settle
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Upper bound on the settle wait; discovery proceeds after it elapses
pub const DEFAULT_STABILITY_TIMEOUT: Duration = Duration::from_secs(5);

/// When a newly created file counts as fully written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StabilityPolicy {
    pub interval: Duration,
    pub timeout: Duration,
}

impl Default for StabilityPolicy {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            timeout: DEFAULT_STABILITY_TIMEOUT,
        }
    }
}

/// Configuration for one watch session
#[derive(Debug, Clone, PartialEq)]
pub struct WatchConfig {
    /// Directories to monitor recursively
    pub directories: Vec<PathBuf>,
    /// Allowed extensions
    pub extensions: ExtensionSet,
    pub stability: StabilityPolicy,
}

impl WatchConfig {
    pub fn new(directories: Vec<PathBuf>, extensions: ExtensionSet) -> Self {
        Self {
            directories,
            extensions,
            stability: StabilityPolicy::default(),
        }
    }

    pub fn with_stability(mut self, stability: StabilityPolicy) -> Self {
        self.stability = stability;
        self
    }

    /// Add a directory unless it is already listed
    pub fn with_directory(mut self, directory: PathBuf) -> Self {
        if !self.directories.contains(&directory) {
            self.directories.push(directory);
        }
        self
    }
}

impl From<&Config> for WatchConfig {
    fn from(config: &Config) -> Self {
        Self::new(
            config.watch_folders.clone(),
            config.supported_extensions.clone(),
        )
    }
}

/// Watch event types for NDJSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    /// Session started on these directories
    WatchStarted { directories: Vec<String> },
    /// A new supported file settled and has not been reported before
    FileDiscovered { path: PathBuf },
    /// Backend error on an attached directory
    Error { message: String },
    /// Session stopped
    WatchStopped,
}

impl WatchEvent {
    /// Convert to JSON string with "command": "watch" field included
    pub fn to_json(&self) -> String {
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!("watch"));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }
}

//! Folder watching
//!
//! Monitors directories for newly created documents and reports each one
//! once it has finished being written:
//! - File system monitoring (via `notify` crate), one watcher per directory
//! - Extension allow-list filtering
//! - Size-stability wait before reporting
//! - Bounded de-duplication of already reported paths
//!
//! ## Usage
//!
//! ```ignore
//! let mut watcher = FolderWatcher::new(|event| { ... });
//! watcher.start(WatchConfig::from(&config));
//! ```

mod event;
mod stability;
mod use_case;


pub use event::{
    StabilityPolicy, WatchConfig, WatchEvent, DEFAULT_POLL_INTERVAL, DEFAULT_STABILITY_TIMEOUT,
};
pub use stability::wait_until_stable;
pub use use_case::FolderWatcher;

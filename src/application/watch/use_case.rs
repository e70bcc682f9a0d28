//! Folder watcher implementation

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::domain::entities::RecentlySeen;

use super::event::{WatchConfig, WatchEvent};
use super::stability::wait_until_stable;

type EventCallback = dyn Fn(WatchEvent) + Send + Sync;

/// Shared by every directory watcher of one session
pub(super) struct DiscoveryHandler {
    config: WatchConfig,
    seen: Mutex<RecentlySeen>,
    on_event: Arc<EventCallback>,
}

impl DiscoveryHandler {
    pub(super) fn new(config: WatchConfig, on_event: Arc<EventCallback>) -> Self {
        Self {
            config,
            seen: Mutex::new(RecentlySeen::default()),
            on_event,
        }
    }

    fn handle(&self, result: Result<Event, notify::Error>) {
        match result {
            Ok(event) => {
                if !matches!(event.kind, EventKind::Create(_)) {
                    return;
                }
                for path in &event.paths {
                    self.on_created(path);
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "watch backend error");
                (self.on_event)(WatchEvent::Error {
                    message: e.to_string(),
                });
            }
        }
    }

    /// Returns true when a discovery notification was emitted
    pub(super) fn on_created(&self, path: &Path) -> bool {
        if path.is_dir() || !self.config.extensions.is_supported(path) {
            return false;
        }

        if !wait_until_stable(path, &self.config.stability) {
            tracing::debug!(path = %path.display(), "proceeding with unsettled file");
        }

        // A panic in another observer must not silence discovery
        let fresh = self
            .seen
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(path);
        if !fresh {
            tracing::debug!(path = %path.display(), "already reported");
            return false;
        }

        tracing::info!(path = %path.display(), "file discovered");
        (self.on_event)(WatchEvent::FileDiscovered {
            path: path.to_path_buf(),
        });
        true
    }
}

struct Session {
    // Dropping a watcher releases its OS handle
    _watchers: Vec<RecommendedWatcher>,
    directories: Vec<PathBuf>,
}

/// Monitors directories for newly created, supported files
pub struct FolderWatcher {
    on_event: Arc<EventCallback>,
    config: Option<WatchConfig>,
    session: Option<Session>,
}

impl FolderWatcher {
    /// Create a watcher that reports to `on_event`
    ///
    /// The callback runs on notify's background threads.
    pub fn new<F>(on_event: F) -> Self
    where
        F: Fn(WatchEvent) + Send + Sync + 'static,
    {
        Self {
            on_event: Arc::new(on_event),
            config: None,
            session: None,
        }
    }

    /// Begin monitoring, restarting if a session is already running
    ///
    /// Returns false when no configured directory could be attached.
    pub fn start(&mut self, config: WatchConfig) -> bool {
        self.stop();

        if config.directories.is_empty() {
            tracing::warn!("no watch folders configured");
            return false;
        }

        let handler = Arc::new(DiscoveryHandler::new(
            config.clone(),
            Arc::clone(&self.on_event),
        ));
        let mut watchers = Vec::new();
        let mut directories = Vec::new();

        for dir in &config.directories {
            if !dir.is_dir() {
                tracing::warn!(path = %dir.display(), "watch folder not found, skipping");
                continue;
            }
            match attach(dir, Arc::clone(&handler)) {
                Ok(watcher) => {
                    tracing::info!(path = %dir.display(), "watching");
                    watchers.push(watcher);
                    directories.push(dir.clone());
                }
                Err(e) => {
                    tracing::warn!(path = %dir.display(), error = %e, "failed to watch folder");
                }
            }
        }

        if watchers.is_empty() {
            return false;
        }

        (self.on_event)(WatchEvent::WatchStarted {
            directories: directories.iter().map(|d| d.display().to_string()).collect(),
        });
        self.config = Some(config);
        self.session = Some(Session {
            _watchers: watchers,
            directories,
        });
        true
    }

    /// Halt monitoring. Safe to call when not running.
    pub fn stop(&mut self) {
        if let Some(session) = self.session.take() {
            drop(session);
            tracing::info!("stopped watching");
            (self.on_event)(WatchEvent::WatchStopped);
        }
    }

    pub fn is_watching(&self) -> bool {
        self.session.is_some()
    }

    /// Directories attached in the current session
    pub fn watched_directories(&self) -> &[PathBuf] {
        self.session
            .as_ref()
            .map(|s| s.directories.as_slice())
            .unwrap_or(&[])
    }

    /// Whether `path` passes the extension filter of the last started session
    pub fn is_supported(&self, path: &Path) -> bool {
        self.config
            .as_ref()
            .map(|c| c.extensions.is_supported(path))
            .unwrap_or(false)
    }
}

impl Drop for FolderWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}

fn attach(dir: &Path, handler: Arc<DiscoveryHandler>) -> notify::Result<RecommendedWatcher> {
    let mut watcher = RecommendedWatcher::new(
        move |res: Result<Event, notify::Error>| handler.handle(res),
        Config::default(),
    )?;
    watcher.watch(dir, RecursiveMode::Recursive)?;
    Ok(watcher)
}

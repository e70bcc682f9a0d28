//! JSON History Store
//!
//! Persists print history at `~/.printwatch/history.json`.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::config::default_history_path;
use crate::domain::entities::{HistoryRecord, PrintHistory};
use crate::domain::ports::{HistoryError, HistoryRepository};

const HISTORY_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct HistoryFile {
    version: u32,
    #[serde(default)]
    records: Vec<HistoryRecord>,
}

pub struct JsonHistoryStore {
    path: PathBuf,
}

impl JsonHistoryStore {
    pub fn new() -> Self {
        Self {
            path: default_history_path(),
        }
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn access(e: impl ToString) -> HistoryError {
        HistoryError::AccessError {
            message: e.to_string(),
        }
    }

    fn load_from_disk(&self) -> Result<Vec<HistoryRecord>, HistoryError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(Self::access(e)),
        };
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let file: HistoryFile =
            serde_json::from_str(&content).map_err(|e| HistoryError::Corrupted {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        Ok(file.records)
    }

    fn save_to_disk(&self, records: Vec<HistoryRecord>) -> Result<(), HistoryError> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent).map_err(Self::access)?;

        let file = HistoryFile {
            version: HISTORY_VERSION,
            records,
        };
        let content =
            serde_json::to_string_pretty(&file).map_err(|e| HistoryError::SerializationError {
                message: e.to_string(),
            })?;

        let mut tmp = tempfile::NamedTempFile::new_in(&parent).map_err(Self::access)?;
        tmp.write_all(content.as_bytes()).map_err(Self::access)?;
        tmp.persist(&self.path).map_err(|e| Self::access(e.error))?;
        Ok(())
    }

    /// Run `f` while holding the exclusive lock file
    fn locked<T>(
        &self,
        f: impl FnOnce() -> Result<T, HistoryError>,
    ) -> Result<T, HistoryError> {
        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent).map_err(Self::access)?;
        }

        let lock_file = fs::File::create(&lock_path).map_err(Self::access)?;
        lock_file.lock_exclusive().map_err(Self::access)?;

        let result = f();

        let _ = lock_file.unlock();
        result
    }
}

impl Default for JsonHistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryRepository for JsonHistoryStore {
    fn load(&self) -> Result<Vec<HistoryRecord>, HistoryError> {
        self.load_from_disk()
    }

    fn append(&self, record: &HistoryRecord, limit: usize) -> Result<(), HistoryError> {
        self.locked(|| {
            // A corrupted file is replaced rather than blocking new records
            let existing = match self.load_from_disk() {
                Ok(records) => records,
                Err(HistoryError::Corrupted { path, message }) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %message,
                        "discarding corrupted history"
                    );
                    Vec::new()
                }
                Err(e) => return Err(e),
            };
            let mut history = PrintHistory::from_records(existing, limit);
            history.push(record.clone());
            self.save_to_disk(history.to_vec())
        })
    }

    fn clear(&self) -> Result<(), HistoryError> {
        self.locked(|| self.save_to_disk(Vec::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::tempdir;

    fn record(name: &str, success: bool) -> HistoryRecord {
        HistoryRecord::now(Path::new(&format!("/in/{name}")), "P1", success, None)
    }

    #[test]
    fn load_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = JsonHistoryStore::with_path(dir.path().join("history.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn append_creates_parent_and_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("history.json");
        let store = JsonHistoryStore::with_path(path.clone());

        store.append(&record("a.pdf", true), 10).unwrap();

        assert!(path.exists());
        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].file_name, "a.pdf");
    }

    #[test]
    fn append_enforces_limit_oldest_first() {
        let dir = tempdir().unwrap();
        let store = JsonHistoryStore::with_path(dir.path().join("history.json"));

        for name in ["1.txt", "2.txt", "3.txt"] {
            store.append(&record(name, true), 2).unwrap();
        }

        let names: Vec<_> = store
            .load()
            .unwrap()
            .into_iter()
            .map(|r| r.file_name)
            .collect();
        assert_eq!(names, vec!["2.txt", "3.txt"]);
    }

    #[test]
    fn corrupted_file_is_reported_on_load_and_replaced_on_append() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, "{ not json").unwrap();
        let store = JsonHistoryStore::with_path(path);

        assert!(matches!(store.load(), Err(HistoryError::Corrupted { .. })));

        store.append(&record("a.pdf", false), 5).unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn clear_empties_the_file() {
        let dir = tempdir().unwrap();
        let store = JsonHistoryStore::with_path(dir.path().join("history.json"));
        store.append(&record("a.pdf", true), 5).unwrap();

        store.clear().unwrap();

        assert!(store.load().unwrap().is_empty());
    }
}

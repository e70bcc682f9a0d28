//! Print history log
//!
//! Insertion-ordered, capped at `limit` records with the oldest evicted
//! first.

use std::collections::VecDeque;
use std::path::Path;

use chrono::Local;
use serde::{Deserialize, Serialize};

pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Timestamp format used for history records
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One logged outcome of a print attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub file_path: String,
    pub file_name: String,
    pub printer_name: String,
    pub timestamp: String,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HistoryRecord {
    /// Build a record stamped with the current local time
    pub fn now(path: &Path, printer_name: &str, success: bool, error: Option<String>) -> Self {
        Self {
            file_path: path.display().to_string(),
            file_name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            printer_name: printer_name.to_string(),
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            success,
            error,
        }
    }
}

/// Bounded FIFO history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintHistory {
    records: VecDeque<HistoryRecord>,
    limit: usize,
}

impl PrintHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            records: VecDeque::new(),
            limit,
        }
    }

    /// Seed from previously stored records, keeping only the newest `limit`
    pub fn from_records(records: Vec<HistoryRecord>, limit: usize) -> Self {
        let mut history = Self::new(limit);
        for record in records {
            history.push(record);
        }
        history
    }

    pub fn push(&mut self, record: HistoryRecord) {
        self.records.push_back(record);
        self.enforce_limit();
    }

    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit;
        self.enforce_limit();
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryRecord> {
        self.records.iter()
    }

    pub fn last(&self) -> Option<&HistoryRecord> {
        self.records.back()
    }

    pub fn to_vec(&self) -> Vec<HistoryRecord> {
        self.records.iter().cloned().collect()
    }

    fn enforce_limit(&mut self) {
        while self.records.len() > self.limit {
            self.records.pop_front();
        }
    }
}

impl Default for PrintHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

//! File extension allow-list
//!
//! Extensions are stored lowercase and dot-prefixed (`.pdf`). Lookups are
//! case-insensitive on the candidate path.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Normalize a user-supplied extension to `.lowercase` form.
///
/// Returns `None` for empty input (`""`, `"."`).
pub fn normalize_extension(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_start_matches('.');
    if trimmed.is_empty() {
        return None;
    }
    Some(format!(".{}", trimmed.to_lowercase()))
}

/// Lowercased, dot-prefixed extension of a path, if any
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .and_then(normalize_extension)
}

/// Set of allowed extensions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ExtensionSet {
    items: BTreeSet<String>,
}

impl ExtensionSet {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            items: extensions
                .into_iter()
                .filter_map(|e| normalize_extension(e.as_ref()))
                .collect(),
        }
    }

    /// Returns true if the extension was newly added
    pub fn insert(&mut self, raw: &str) -> bool {
        match normalize_extension(raw) {
            Some(ext) => self.items.insert(ext),
            None => false,
        }
    }

    pub fn remove(&mut self, raw: &str) -> bool {
        match normalize_extension(raw) {
            Some(ext) => self.items.remove(&ext),
            None => false,
        }
    }

    pub fn contains(&self, raw: &str) -> bool {
        normalize_extension(raw)
            .map(|ext| self.items.contains(&ext))
            .unwrap_or(false)
    }

    /// Whether `path` has an extension in this set
    pub fn is_supported(&self, path: &Path) -> bool {
        extension_of(path)
            .map(|ext| self.items.contains(&ext))
            .unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for ExtensionSet {
    fn from(value: Vec<String>) -> Self {
        Self::new(value)
    }
}

impl From<ExtensionSet> for Vec<String> {
    fn from(value: ExtensionSet) -> Self {
        value.items.into_iter().collect()
    }
}

//! Bounded memory of already-notified paths

use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};

pub const RECENTLY_SEEN_CAPACITY: usize = 100;

/// Suppresses duplicate discovery notifications for the same path.
///
/// When full, the oldest inserted path is forgotten.
#[derive(Debug, Clone)]
pub struct RecentlySeen {
    order: VecDeque<PathBuf>,
    members: HashSet<PathBuf>,
    capacity: usize,
}

impl RecentlySeen {
    pub fn new(capacity: usize) -> Self {
        Self {
            order: VecDeque::with_capacity(capacity.min(RECENTLY_SEEN_CAPACITY)),
            members: HashSet::new(),
            capacity,
        }
    }

    /// Record `path`; returns false if it was already present
    pub fn insert(&mut self, path: &Path) -> bool {
        if self.members.contains(path) {
            return false;
        }
        self.members.insert(path.to_path_buf());
        self.order.push_back(path.to_path_buf());
        while self.order.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.members.remove(&oldest);
            }
        }
        true
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.members.contains(path)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }
}

impl Default for RecentlySeen {
    fn default() -> Self {
        Self::new(RECENTLY_SEEN_CAPACITY)
    }
}

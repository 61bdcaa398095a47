//! Process-local memoization of genre results.

use std::collections::HashMap;
use std::sync::Arc;

use pipeline::DisplayItem;
use tokio::sync::RwLock;
use tracing::debug;

/// Genre results keyed by (lower-cased genre, limit).
///
/// Entries live until the process exits. Once `max_entries` keys are held,
/// new keys are no longer stored; existing keys can still be replaced. Two
/// concurrent misses for the same key both resolve and the later insert wins.
#[derive(Debug)]
pub struct QueryCache {
    entries: RwLock<HashMap<(String, usize), Arc<Vec<DisplayItem>>>>,
    max_entries: usize,
}

impl QueryCache {
    pub const DEFAULT_MAX_ENTRIES: usize = 256;

    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            max_entries,
        }
    }

    fn key(genre: &str, limit: usize) -> (String, usize) {
        (genre.trim().to_lowercase(), limit)
    }

    pub async fn get(&self, genre: &str, limit: usize) -> Option<Arc<Vec<DisplayItem>>> {
        self.entries.read().await.get(&Self::key(genre, limit)).cloned()
    }

    /// Store a result; returns `false` when the cache is full
    pub async fn insert(&self, genre: &str, limit: usize, items: Arc<Vec<DisplayItem>>) -> bool {
        let key = Self::key(genre, limit);
        let mut entries = self.entries.write().await;
        if entries.len() >= self.max_entries && !entries.contains_key(&key) {
            debug!("Query cache full ({} entries), not storing '{}'", entries.len(), key.0);
            return false;
        }
        entries.insert(key, items);
        true
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ENTRIES)
    }
}

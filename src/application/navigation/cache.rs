//! Prefetch cache - which route bundles have been requested.
//!
//! Entries are marked before the load starts so concurrent triggers for the
//! same path collapse into one load. A failed load evicts its entry; a
//! successful one stays for the life of the process.

use std::collections::HashMap;

use serde::Serialize;
use tokio::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PrefetchState {
    InFlight,
    Loaded,
}

#[derive(Debug, Default)]
pub struct PrefetchCache {
    entries: Mutex<HashMap<String, PrefetchState>>,
}

impl PrefetchCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `path` as in flight unless it is already marked.
    ///
    /// Returns `true` if this call placed the mark.
    pub async fn try_mark(&self, path: &str) -> bool {
        let mut entries = self.entries.lock().await;
        if entries.contains_key(path) {
            return false;
        }
        entries.insert(path.to_string(), PrefetchState::InFlight);
        true
    }

    pub async fn mark_loaded(&self, path: &str) {
        self.entries
            .lock()
            .await
            .insert(path.to_string(), PrefetchState::Loaded);
    }

    /// Drops the mark so a later trigger retries.
    pub async fn evict(&self, path: &str) {
        self.entries.lock().await.remove(path);
    }

    pub async fn state(&self, path: &str) -> Option<PrefetchState> {
        self.entries.lock().await.get(path).copied()
    }

    pub async fn contains(&self, path: &str) -> bool {
        self.entries.lock().await.contains_key(path)
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

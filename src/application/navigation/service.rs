//! NavigationService - speculative route bundle loading.

use std::sync::Arc;

use serde::Serialize;
use tokio::task::JoinHandle;

use super::{PrefetchCache, RouteRegistry};

/// What a prefetch trigger ended up doing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PrefetchOutcome {
    /// Another trigger already marked the path.
    AlreadyPrefetched,
    /// No loader is registered for the path.
    NoLoader,
    Loaded,
    /// The load failed and the path was evicted.
    Failed { reason: String },
}

#[derive(Debug, Clone)]
pub struct NavigationService {
    registry: RouteRegistry,
    cache: Arc<PrefetchCache>,
}

impl NavigationService {
    pub fn new(registry: RouteRegistry, cache: Arc<PrefetchCache>) -> Self {
        Self { registry, cache }
    }

    pub fn cache(&self) -> &Arc<PrefetchCache> {
        &self.cache
    }

    pub fn registry(&self) -> &RouteRegistry {
        &self.registry
    }

    /// Loads the bundle for `path` once.
    ///
    /// The path is marked before the load so overlapping triggers are no-ops.
    /// A failed load is evicted, so the next trigger tries again.
    pub async fn prefetch_route(&self, path: &str) -> PrefetchOutcome {
        let Some(loader) = self.registry.loader_for(path) else {
            return PrefetchOutcome::NoLoader;
        };
        if !self.cache.try_mark(path).await {
            return PrefetchOutcome::AlreadyPrefetched;
        }

        match loader.load(path).await {
            Ok(()) => {
                self.cache.mark_loaded(path).await;
                tracing::debug!(path, "route prefetched");
                PrefetchOutcome::Loaded
            }
            Err(e) => {
                self.cache.evict(path).await;
                tracing::warn!(path, error = %e, "route prefetch failed");
                PrefetchOutcome::Failed {
                    reason: e.reason,
                }
            }
        }
    }

    /// Fires `prefetch_route` on the runtime without waiting for it.
    pub fn spawn_prefetch(&self, path: impl Into<String>) -> JoinHandle<PrefetchOutcome> {
        let service = self.clone();
        let path = path.into();
        tokio::spawn(async move { service.prefetch_route(&path).await })
    }
}

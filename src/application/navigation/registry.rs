//! Route registry - loaders keyed by route path.

use std::collections::HashMap;
use std::sync::Arc;

use crate::ports::RouteLoader;

#[derive(Default, Clone)]
pub struct RouteRegistry {
    loaders: HashMap<String, Arc<dyn RouteLoader>>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `loader` for `path`, replacing any previous one.
    pub fn with_route(mut self, path: impl Into<String>, loader: Arc<dyn RouteLoader>) -> Self {
        self.loaders.insert(path.into(), loader);
        self
    }

    pub fn loader_for(&self, path: &str) -> Option<Arc<dyn RouteLoader>> {
        self.loaders.get(path).cloned()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.loaders.keys().map(String::as_str)
    }
}

impl std::fmt::Debug for RouteRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteRegistry")
            .field("paths", &self.loaders.keys().collect::<Vec<_>>())
            .finish()
    }
}

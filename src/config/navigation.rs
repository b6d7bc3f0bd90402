//! Route prefetch configuration

use serde::Deserialize;
use std::collections::HashSet;
use std::time::Duration;

use super::error::ValidationError;

/// One prefetchable client route.
///
/// Routes are a list rather than a map because the loader lowercases map
/// keys, which would silently rewrite paths like `/Dashboard`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RouteConfig {
    pub path: String,
    pub bundle_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NavigationConfig {
    #[serde(default)]
    pub routes: Vec<RouteConfig>,

    /// Per-bundle fetch timeout in seconds
    #[serde(default = "default_timeout")]
    pub prefetch_timeout_secs: u64,
}

impl NavigationConfig {
    pub fn prefetch_timeout(&self) -> Duration {
        Duration::from_secs(self.prefetch_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.prefetch_timeout_secs == 0 || self.prefetch_timeout_secs > 60 {
            return Err(ValidationError::InvalidTimeout);
        }
        let mut seen = HashSet::new();
        for route in &self.routes {
            if !route.path.starts_with('/') {
                return Err(ValidationError::InvalidRoutePath(route.path.clone()));
            }
            if !seen.insert(route.path.as_str()) {
                return Err(ValidationError::DuplicateRoutePath(route.path.clone()));
            }
        }
        Ok(())
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            routes: Vec::new(),
            prefetch_timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    5
}

//! Route bundle loader port.
//!
//! A loader fetches whatever a client-side route needs before the user
//! navigates to it. The navigation service calls it at most once per path
//! unless a previous attempt failed.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("failed to load route bundle for '{path}': {reason}")]
pub struct RouteLoadError {
    pub path: String,
    pub reason: String,
}

impl RouteLoadError {
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

#[async_trait]
pub trait RouteLoader: Send + Sync {
    async fn load(&self, path: &str) -> Result<(), RouteLoadError>;
}

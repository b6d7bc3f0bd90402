//! Route loader that warms a bundle URL with a GET.

use async_trait::async_trait;
use reqwest::Client;

use crate::ports::{RouteLoadError, RouteLoader};

#[derive(Debug, Clone)]
pub struct HttpRouteLoader {
    client: Client,
    bundle_url: String,
}

impl HttpRouteLoader {
    pub fn new(client: Client, bundle_url: impl Into<String>) -> Self {
        Self {
            client,
            bundle_url: bundle_url.into(),
        }
    }

    pub fn bundle_url(&self) -> &str {
        &self.bundle_url
    }
}

#[async_trait]
impl RouteLoader for HttpRouteLoader {
    async fn load(&self, path: &str) -> Result<(), RouteLoadError> {
        let response = self
            .client
            .get(&self.bundle_url)
            .send()
            .await
            .map_err(|e| RouteLoadError::new(path, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RouteLoadError::new(
                path,
                format!("{} returned {}", self.bundle_url, status),
            ));
        }
        // Drain the body so the bundle actually lands in any intermediate cache.
        response
            .bytes()
            .await
            .map_err(|e| RouteLoadError::new(path, e.to_string()))?;
        Ok(())
    }
}

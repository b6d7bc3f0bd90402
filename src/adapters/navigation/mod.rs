//! Route loader adapters.

mod http_loader;

pub use http_loader::HttpRouteLoader;

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::application::navigation::RouteRegistry;
use crate::config::RouteConfig;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Registry with one `HttpRouteLoader` per configured route.
pub fn http_route_registry(
    routes: &[RouteConfig],
    timeout: Duration,
) -> Result<RouteRegistry, DomainError> {
    let client = Client::builder().timeout(timeout).build().map_err(|e| {
        DomainError::new(
            ErrorCode::InternalError,
            format!("Failed to create HTTP client: {}", e),
        )
    })?;

    Ok(routes
        .iter()
        .fold(RouteRegistry::new(), |registry, route| {
            let loader = HttpRouteLoader::new(client.clone(), route.bundle_url.clone());
            registry.with_route(route.path.clone(), Arc::new(loader))
        }))
}

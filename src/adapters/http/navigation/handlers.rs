//! HTTP handlers for navigation endpoints.

use axum::extract::{Json, State};
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::adapters::http::state::AppState;
use crate::application::navigation::PrefetchState;

#[derive(Debug, Clone, Deserialize)]
pub struct PrefetchRequest {
    pub path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RouteStatus {
    pub path: String,
    /// `None` until the route has been prefetched.
    pub state: Option<PrefetchState>,
}

/// GET /api/navigation/routes
pub async fn list_routes(State(state): State<AppState>) -> impl IntoResponse {
    let mut paths: Vec<String> = state
        .navigation
        .registry()
        .paths()
        .map(str::to_string)
        .collect();
    paths.sort();

    let cache = state.navigation.cache();
    let mut routes = Vec::with_capacity(paths.len());
    for path in paths {
        let cached = cache.state(&path).await;
        routes.push(RouteStatus { path, state: cached });
    }
    Json(routes)
}

/// POST /api/navigation/prefetch
///
/// Waits for the load so the caller learns the outcome; a failed load is a
/// normal answer rather than an error status.
pub async fn prefetch(
    State(state): State<AppState>,
    Json(request): Json<PrefetchRequest>,
) -> impl IntoResponse {
    Json(state.navigation.prefetch_route(&request.path).await)
}

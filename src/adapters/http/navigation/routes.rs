//! Axum routes for navigation endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{list_routes, prefetch};
use crate::adapters::http::state::AppState;

/// Mounted at `/api/navigation`.
pub fn navigation_routes() -> Router<AppState> {
    Router::new()
        .route("/routes", get(list_routes))
        .route("/prefetch", post(prefetch))
}

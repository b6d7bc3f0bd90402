//! Axum routes for access endpoints.

use axum::{routing::get, Router};

use super::handlers::{check_feature, get_quotas, list_tiers};
use crate::adapters::http::state::AppState;

/// Mounted at `/api/access`.
pub fn access_routes() -> Router<AppState> {
    Router::new()
        .route("/tiers", get(list_tiers))
        .route("/features/:feature", get(check_feature))
        .route("/quotas", get(get_quotas))
}

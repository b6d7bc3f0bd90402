//! Top-level router: every API module, auth, tracing, CORS and timeouts.

use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::routing::get;
use axum::{middleware, Json, Router};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::access::access_routes;
use super::middleware::{auth_middleware, AuthState};
use super::navigation::navigation_routes;
use super::referrals::referral_routes;
use super::state::AppState;
use crate::config::ServerConfig;

/// Builds the application router.
///
/// ```text
/// /health
/// /api/access/...
/// /api/referrals/...
/// /api/navigation/...
/// ```
pub fn build_router(state: AppState, validator: AuthState, server: &ServerConfig) -> Router {
    let api = Router::new()
        .nest("/access", access_routes())
        .nest("/referrals", referral_routes())
        .nest("/navigation", navigation_routes())
        .layer(middleware::from_fn_with_state(validator, auth_middleware));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .with_state(state)
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "ok",
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}

/// CORS for the configured origins. `*` allows any origin; with none
/// configured, cross-origin requests get no CORS headers at all.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    if origins.iter().any(|o| o == "*") {
        return base.allow_origin(AllowOrigin::any());
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring malformed CORS origin");
                None
            }
        })
        .collect();

    base.allow_origin(AllowOrigin::list(origins))
}

//! Axum routes for referral endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_referral, generate_code, get_referrals};
use crate::adapters::http::state::AppState;

/// Mounted at `/api/referrals`.
pub fn referral_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_referrals).post(create_referral))
        .route("/code", post(generate_code))
}

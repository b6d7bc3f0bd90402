//! HTTP handlers for access endpoints.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;

use super::dto::{FeatureAccessResponse, QuotasQuery, QuotasResponse, TierResponse};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::OptionalAuth;
use crate::adapters::http::state::AppState;

/// GET /api/access/tiers
pub async fn list_tiers(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let resolver = state.access.resolver();
    let tiers: Vec<TierResponse> = state
        .access
        .tier_catalog()
        .await?
        .into_iter()
        .map(|tier| {
            let permissions = resolver.permissions_for(Some(tier.name.as_str())).clone();
            TierResponse::new(tier, permissions)
        })
        .collect();
    Ok(Json(tiers))
}

/// GET /api/access/features/:feature
///
/// Always 200; a denial is a normal answer, not an error.
pub async fn check_feature(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    Path(feature): Path<String>,
) -> impl IntoResponse {
    let check = state.access.check_detailed(user.as_ref(), &feature).await;
    Json(FeatureAccessResponse::new(feature, check))
}

/// GET /api/access/quotas?used_listings=n
pub async fn get_quotas(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    Query(query): Query<QuotasQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let snapshot = state.access.snapshot(user.as_ref()).await?;
    Ok(Json(QuotasResponse {
        listing_banner: snapshot.listing_banner(query.used_listings),
        quotas: snapshot.quotas,
        tier: snapshot.tier,
    }))
}

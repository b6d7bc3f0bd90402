//! HTTP handlers for referral endpoints.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::dto::{CreateReferralRequest, CreateReferralResponse, ReferralCodeResponse};
use crate::adapters::http::error::status_for;
use crate::adapters::http::middleware::{OptionalAuth, RequireAuth};
use crate::adapters::http::state::AppState;
use crate::domain::referral::ReferralError;

/// GET /api/referrals
pub async fn get_referrals(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
) -> Result<impl IntoResponse, ReferralApiError> {
    let ledger = state.ledger_for(user.as_ref());
    ledger.refresh().await?;
    Ok(Json(ledger.view().await))
}

/// POST /api/referrals/code
pub async fn generate_code(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ReferralApiError> {
    let ledger = state.ledger_for(Some(&user));
    let code = ledger.generate_code().await.ok_or_else(|| {
        ReferralError::Backend("Could not generate a referral code. Please try again.".to_string())
    })?;

    let response = ReferralCodeResponse {
        referral_link: ledger.referral_link().await,
        referral_code: code,
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/referrals
///
/// Loads the ledger first so the caller's issued code is known, then
/// submits the invite.
pub async fn create_referral(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    Json(request): Json<CreateReferralRequest>,
) -> Result<impl IntoResponse, ReferralApiError> {
    let ledger = state.ledger_for(user.as_ref());
    ledger.refresh().await?;
    let referral = ledger.create_referral(&request.email).await?;

    let response = CreateReferralResponse {
        referral,
        ledger: ledger.view().await,
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// Turns a `ReferralError` into its `{error, code}` body.
#[derive(Debug)]
pub struct ReferralApiError(pub ReferralError);

impl From<ReferralError> for ReferralApiError {
    fn from(err: ReferralError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ReferralApiError {
    fn into_response(self) -> Response {
        let status = status_for(self.0.code());
        (status, Json(self.0.to_body())).into_response()
    }
}

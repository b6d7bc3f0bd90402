//! Request and response types for referral endpoints.

use serde::{Deserialize, Serialize};

use crate::application::referral::LedgerView;
use crate::domain::referral::{Referral, ReferralCode};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateReferralRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateReferralResponse {
    pub referral: Referral,
    /// Ledger state after the post-insert re-fetch.
    pub ledger: LedgerView,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReferralCodeResponse {
    pub referral_code: ReferralCode,
    pub referral_link: String,
}

//! Wire rows of the hosted backend's tables and their domain mapping.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::foundation::{
    DomainError, Money, ReferralId, SubscriptionId, Timestamp, UserId,
};
use crate::domain::referral::{
    NewReferral, Referral, ReferralCode, ReferralContestStatus, ReferralStatus, ReferredEmail,
};
use crate::domain::subscription::{SubscriptionStatus, SubscriptionTier, UserSubscription};

const DEFAULT_CURRENCY: &str = "INR";

/// Contest prize when the standing row carries none.
pub const DEFAULT_CONTEST_PRIZE_MINOR: i64 = 500_000;

/// `subscription_tiers` row.
///
/// Quota columns are nullable; a missing quota counts as zero.
#[derive(Debug, Clone, Deserialize)]
pub struct TierRow {
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    /// Price in major units, e.g. `299.00`
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub max_tools_access: Option<u32>,
    #[serde(default)]
    pub max_listings: Option<u32>,
    #[serde(default)]
    pub features: Option<Vec<String>>,
}

impl From<TierRow> for SubscriptionTier {
    fn from(row: TierRow) -> Self {
        let price_minor = row.price.map(|p| (p * 100.0).round() as i64).unwrap_or(0);
        SubscriptionTier {
            display_name: row.display_name.unwrap_or_else(|| row.name.clone()),
            name: row.name,
            max_tools_access: row.max_tools_access.unwrap_or(0),
            max_listings: row.max_listings.unwrap_or(0),
            price: Money::new(
                price_minor,
                row.currency.unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            ),
            features: row.features.unwrap_or_default(),
        }
    }
}

/// `user_subscriptions` row with the tier joined in as `tier`.
#[derive(Debug, Clone, Deserialize)]
pub struct SubscriptionRow {
    pub id: Uuid,
    pub user_id: String,
    pub status: SubscriptionStatus,
    pub created_at: Timestamp,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
    #[serde(default)]
    pub tier: Option<TierRow>,
}

impl SubscriptionRow {
    /// `None` when the joined tier is missing (dangling `tier_id`).
    pub fn into_domain(self) -> Result<Option<UserSubscription>, DomainError> {
        let Some(tier) = self.tier else {
            tracing::warn!(subscription_id = %self.id, "subscription row has no tier");
            return Ok(None);
        };
        Ok(Some(UserSubscription {
            id: SubscriptionId::from_uuid(self.id),
            user_id: UserId::new(self.user_id)?,
            tier: tier.into(),
            status: self.status,
            started_at: self.created_at,
            updated_at: self.updated_at.unwrap_or(self.created_at),
        }))
    }
}

/// `referrals` row.
#[derive(Debug, Clone, Deserialize)]
pub struct ReferralRow {
    pub id: Uuid,
    pub referrer_user_id: String,
    pub referred_email: String,
    pub referral_code: String,
    pub status: ReferralStatus,
    pub created_at: Timestamp,
    #[serde(default)]
    pub completed_at: Option<Timestamp>,
}

/// Stored email and code are taken as the backend has them; only the
/// referrer id must be usable.
impl TryFrom<ReferralRow> for Referral {
    type Error = DomainError;

    fn try_from(row: ReferralRow) -> Result<Self, Self::Error> {
        Ok(Referral {
            id: ReferralId::from_uuid(row.id),
            referrer_user_id: UserId::new(row.referrer_user_id)?,
            referred_email: ReferredEmail::from_stored(row.referred_email),
            referral_code: ReferralCode::from_stored(row.referral_code),
            status: row.status,
            created_at: row.created_at,
            completed_at: row.completed_at,
        })
    }
}

/// Body of a `referrals` insert.
#[derive(Debug, Clone, Serialize)]
pub struct InsertReferralRow<'a> {
    pub referrer_user_id: &'a str,
    pub referred_email: &'a str,
    pub referral_code: &'a str,
}

impl<'a> From<&'a NewReferral> for InsertReferralRow<'a> {
    fn from(referral: &'a NewReferral) -> Self {
        Self {
            referrer_user_id: referral.referrer_user_id.as_str(),
            referred_email: referral.referred_email.as_str(),
            referral_code: referral.referral_code.as_str(),
        }
    }
}

/// `profiles` projection holding the issued code.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileCodeRow {
    #[serde(default)]
    pub referral_code: Option<String>,
}

impl ProfileCodeRow {
    /// Blank codes count as not issued.
    pub fn into_code(self) -> Option<ReferralCode> {
        self.referral_code
            .map(|code| code.trim().to_string())
            .filter(|code| !code.is_empty())
            .map(ReferralCode::from_stored)
    }
}

/// `referral_contest_status` row.
#[derive(Debug, Clone, Deserialize)]
pub struct ContestRow {
    #[serde(default)]
    pub referral_count: Option<u32>,
    #[serde(default)]
    pub is_eligible: Option<bool>,
    #[serde(default)]
    pub prize_amount: Option<f64>,
    #[serde(default)]
    pub prize_currency: Option<String>,
}

impl From<ContestRow> for ReferralContestStatus {
    fn from(row: ContestRow) -> Self {
        let prize_minor = row
            .prize_amount
            .map(|p| (p * 100.0).round() as i64)
            .unwrap_or(DEFAULT_CONTEST_PRIZE_MINOR);
        ReferralContestStatus {
            referral_count: row.referral_count.unwrap_or(0),
            is_eligible: row.is_eligible.unwrap_or(false),
            prize: Money::new(
                prize_minor,
                row.prize_currency.unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            ),
        }
    }
}

//! Request and response types for access endpoints.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::application::access::{DenialReason, FeatureCheck};
use crate::domain::access::FeatureId;
use crate::domain::foundation::Money;
use crate::domain::subscription::{ListingBanner, Quotas, SubscriptionTier};

/// One entry of the pricing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierResponse {
    pub name: String,
    pub display_name: String,
    pub max_tools_access: u32,
    pub max_listings: u32,
    pub price: Money,
    /// Marketing bullet points.
    pub features: Vec<String>,
    /// Feature identifiers the tier unlocks.
    pub permissions: BTreeSet<FeatureId>,
}

impl TierResponse {
    pub fn new(tier: SubscriptionTier, permissions: BTreeSet<FeatureId>) -> Self {
        Self {
            name: tier.name,
            display_name: tier.display_name,
            max_tools_access: tier.max_tools_access,
            max_listings: tier.max_listings,
            price: tier.price,
            features: tier.features,
            permissions,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureAccessResponse {
    pub feature: String,
    pub tier: Option<String>,
    pub allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<DenialReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FeatureAccessResponse {
    pub fn new(feature: impl Into<String>, check: FeatureCheck) -> Self {
        let reason = check.decision.reason().cloned();
        Self {
            feature: feature.into(),
            tier: check.tier,
            allowed: check.decision.is_allowed(),
            message: reason.as_ref().map(DenialReason::user_message),
            reason,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuotasQuery {
    #[serde(default)]
    pub used_listings: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotasResponse {
    pub tier: Option<String>,
    pub quotas: Quotas,
    /// Absent when the tier has unlimited listings.
    pub listing_banner: Option<ListingBanner>,
}

//! Numeric quotas and the listing-limit banner.

use serde::{Deserialize, Serialize};

use super::UserSubscription;

/// Quotas of the tier in effect.
///
/// Zero across the board when no active subscription is loaded, so callers
/// can do arithmetic without special-casing "no tier".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quotas {
    pub max_tools_access: u32,
    pub max_listings: u32,
}

impl Quotas {
    /// Quotas for a user with no tier.
    pub fn none() -> Self {
        Self::default()
    }

    /// Reads the quotas off the active tier, defaulting to zero.
    pub fn from_subscription(subscription: Option<&UserSubscription>) -> Self {
        subscription
            .and_then(UserSubscription::active_tier)
            .map(|tier| Self {
                max_tools_access: tier.max_tools_access,
                max_listings: tier.max_listings,
            })
            .unwrap_or_default()
    }

    /// How many more listings fit under the quota.
    pub fn listings_remaining(&self, used: u32) -> u32 {
        self.max_listings.saturating_sub(used)
    }
}

/// What the marketplace dashboard shows above the listing form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingBanner {
    pub used: u32,
    pub max: u32,
    pub remaining: u32,
    pub limit_reached: bool,
}

impl ListingBanner {
    /// Builds the banner for the given subscription and listing count.
    ///
    /// Returns `None` when the tier in effect has unlimited listings; the
    /// banner is not shown at all in that case.
    pub fn for_subscription(subscription: Option<&UserSubscription>, used: u32) -> Option<Self> {
        let unlimited = subscription
            .and_then(UserSubscription::active_tier)
            .and_then(|tier| tier.tier_name())
            .map(|name| name.has_unlimited_listings())
            .unwrap_or(false);
        if unlimited {
            return None;
        }

        let quotas = Quotas::from_subscription(subscription);
        Some(Self {
            used,
            max: quotas.max_listings,
            remaining: quotas.listings_remaining(used),
            limit_reached: used >= quotas.max_listings,
        })
    }
}

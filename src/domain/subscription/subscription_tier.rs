//! Subscription tier definitions as sold on the pricing page.

use serde::{Deserialize, Serialize};

use super::TierName;
use crate::domain::foundation::Money;

/// A tier definition with its quotas, price and marketing feature list.
///
/// Owned by the subscription data source and immutable once loaded. `name`
/// stays a string because the backend is free to carry tiers this build
/// does not know about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionTier {
    /// Tier identifier (`starter`, `creator`, `career`).
    pub name: String,
    /// How many AI tools the user may unlock.
    pub max_tools_access: u32,
    /// How many marketplace listings the user may keep live.
    pub max_listings: u32,
    pub price: Money,
    pub display_name: String,
    /// Human-readable bullet points, in display order.
    pub features: Vec<String>,
}

impl SubscriptionTier {
    /// The default definition for a known tier.
    ///
    /// | Tier | Tools | Listings | Price |
    /// |------|-------|----------|-------|
    /// | Starter | 10 | 1 | free |
    /// | Creator | 50 | 10 | INR 299 |
    /// | Career | 500 | 1000 | INR 799 |
    pub fn builtin(tier: TierName) -> Self {
        let (max_tools_access, max_listings, price, features): (u32, u32, i64, &[&str]) =
            match tier {
                TierName::Starter => (
                    10,
                    1,
                    0,
                    &["All free courses", "AI tools directory", "1 marketplace listing"],
                ),
                TierName::Creator => (
                    50,
                    10,
                    29_900,
                    &[
                        "Everything in Starter",
                        "Premium courses",
                        "10 marketplace listings",
                        "Listing analytics",
                    ],
                ),
                TierName::Career => (
                    500,
                    1_000,
                    79_900,
                    &[
                        "Everything in Creator",
                        "Unlimited marketplace listings",
                        "Career coaching sessions",
                        "Priority support",
                    ],
                ),
            };

        Self {
            name: tier.as_str().to_string(),
            max_tools_access,
            max_listings,
            price: Money::new(price, "INR"),
            display_name: tier.display_name().to_string(),
            features: features.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// The known tier this definition belongs to, if any.
    pub fn tier_name(&self) -> Option<TierName> {
        self.name.parse().ok()
    }

    pub fn is_free(&self) -> bool {
        self.price.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_allows_one_listing() {
        assert_eq!(SubscriptionTier::builtin(TierName::Starter).max_listings, 1);
    }

    #[test]
    fn creator_allows_ten_listings() {
        assert_eq!(SubscriptionTier::builtin(TierName::Creator).max_listings, 10);
    }

    #[test]
    fn quotas_grow_with_tier() {
        let tiers: Vec<SubscriptionTier> =
            TierName::ALL.iter().map(|t| SubscriptionTier::builtin(*t)).collect();
        for pair in tiers.windows(2) {
            assert!(pair[0].max_tools_access <= pair[1].max_tools_access);
            assert!(pair[0].max_listings <= pair[1].max_listings);
        }
    }

    #[test]
    fn starter_is_free() {
        assert!(SubscriptionTier::builtin(TierName::Starter).is_free());
        assert!(!SubscriptionTier::builtin(TierName::Career).is_free());
    }

    #[test]
    fn unknown_name_has_no_tier_name() {
        let mut tier = SubscriptionTier::builtin(TierName::Creator);
        tier.name = "creater".to_string();
        assert_eq!(tier.tier_name(), None);
    }

    #[test]
    fn deserializes_backend_row_shape() {
        let json = r#"{
            "name": "creator",
            "max_tools_access": 50,
            "max_listings": 10,
            "price": {"amount_minor": 29900, "currency": "INR"},
            "display_name": "Creator",
            "features": ["Premium courses"]
        }"#;
        let tier: SubscriptionTier = serde_json::from_str(json).unwrap();
        assert_eq!(tier.tier_name(), Some(TierName::Creator));
        assert_eq!(tier.features, vec!["Premium courses".to_string()]);
    }
}

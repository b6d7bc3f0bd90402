//! Feature-access resolver.
//!
//! Answers "may this tier use feature X?" against the permission table.
//! Pure and synchronous: the same (tier, feature) pair always gets the same
//! answer for a given table.
//!
//! # Denial semantics
//!
//! - No tier (`None`) denies every feature. Callers treat it as minimum
//!   privilege, not as a fault.
//! - A tier identifier missing from the table gets the empty set.
//! - A tier whose entry has no features also gets the empty set, so it is
//!   indistinguishable from an unknown tier here.

use std::collections::BTreeSet;
use std::sync::Arc;

use super::{FeatureId, FeaturePermissionTable};
use crate::domain::subscription::{ListingBanner, Quotas, TierName, UserSubscription};

/// Resolves feature access from a validated permission table.
#[derive(Debug, Clone)]
pub struct FeatureAccessResolver {
    table: Arc<FeaturePermissionTable>,
}

impl FeatureAccessResolver {
    pub fn new(table: Arc<FeaturePermissionTable>) -> Self {
        Self { table }
    }

    /// Whether `tier` grants `feature`.
    pub fn can_access(&self, tier: Option<&str>, feature: &str) -> bool {
        self.permissions_for(tier).contains(feature)
    }

    /// The full permission set of a tier; empty for no tier or an unknown one.
    pub fn permissions_for(&self, tier: Option<&str>) -> &BTreeSet<FeatureId> {
        let Some(tier) = tier else {
            return self.table.no_features();
        };
        if !self.table.contains_tier(tier) {
            tracing::debug!(tier, "tier identifier not in permission table");
        }
        self.table.features_for(tier)
    }

    /// The least permissive tier that grants `feature`, for upgrade prompts.
    pub fn required_tier(&self, feature: &str) -> Option<TierName> {
        self.table
            .entries()
            .iter()
            .find(|entry| entry.features.contains(feature))
            .map(|entry| entry.tier)
    }

    /// Quotas of the active subscription; zero when none is loaded.
    pub fn quotas(&self, subscription: Option<&UserSubscription>) -> Quotas {
        Quotas::from_subscription(subscription)
    }

    /// Listing banner for the dashboard; `None` when it is suppressed.
    pub fn listing_banner(
        &self,
        subscription: Option<&UserSubscription>,
        used_listings: u32,
    ) -> Option<ListingBanner> {
        ListingBanner::for_subscription(subscription, used_listings)
    }

    pub fn table(&self) -> &FeaturePermissionTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::access::{features, TierPermissions};
    use crate::domain::foundation::UserId;
    use crate::domain::subscription::SubscriptionTier;
    use proptest::prelude::*;

    fn resolver() -> FeatureAccessResolver {
        FeatureAccessResolver::new(Arc::new(FeaturePermissionTable::builtin().unwrap()))
    }

    fn resolver_with_empty_starter() -> FeatureAccessResolver {
        let set = |ids: &[&str]| -> BTreeSet<FeatureId> {
            ids.iter().map(|i| FeatureId::new(*i).unwrap()).collect()
        };
        let table = FeaturePermissionTable::new(vec![
            TierPermissions {
                tier: TierName::Starter,
                features: BTreeSet::new(),
            },
            TierPermissions {
                tier: TierName::Creator,
                features: set(&["marketplace"]),
            },
            TierPermissions {
                tier: TierName::Career,
                features: set(&["marketplace", "analytics"]),
            },
        ])
        .unwrap();
        FeatureAccessResolver::new(Arc::new(table))
    }

    const ALL_FEATURES: [&str; 10] = [
        features::COURSES,
        features::PREMIUM_COURSES,
        features::AI_TOOLS,
        features::REFERRALS,
        features::MARKETPLACE_BROWSE,
        features::MARKETPLACE,
        features::ANALYTICS,
        features::CAREER_COACHING,
        features::RESUME_REVIEW,
        features::PRIORITY_SUPPORT,
    ];

    #[test]
    fn starter_browses_but_cannot_sell() {
        let r = resolver();
        assert!(r.can_access(Some("starter"), features::MARKETPLACE_BROWSE));
        assert!(!r.can_access(Some("starter"), features::MARKETPLACE));
    }

    #[test]
    fn creator_gets_marketplace_and_analytics() {
        let r = resolver();
        assert!(r.can_access(Some("creator"), features::MARKETPLACE));
        assert!(r.can_access(Some("creator"), features::ANALYTICS));
        assert!(!r.can_access(Some("creator"), features::CAREER_COACHING));
    }

    #[test]
    fn career_gets_everything() {
        let r = resolver();
        for feature in ALL_FEATURES {
            assert!(r.can_access(Some("career"), feature), "career lacks {feature}");
        }
    }

    #[test]
    fn no_tier_denies_everything() {
        let r = resolver();
        for feature in ALL_FEATURES {
            assert!(!r.can_access(None, feature));
        }
        assert!(r.permissions_for(None).is_empty());
    }

    #[test]
    fn empty_tier_and_unknown_tier_are_equivalent() {
        let r = resolver_with_empty_starter();
        for feature in ["marketplace", "analytics", "courses"] {
            assert_eq!(
                r.can_access(Some("starter"), feature),
                r.can_access(Some("startr"), feature)
            );
        }
        assert_eq!(r.permissions_for(Some("starter")), r.permissions_for(Some("startr")));
    }

    #[test]
    fn required_tier_is_least_permissive_grant() {
        let r = resolver();
        assert_eq!(r.required_tier(features::COURSES), Some(TierName::Starter));
        assert_eq!(r.required_tier(features::ANALYTICS), Some(TierName::Creator));
        assert_eq!(r.required_tier(features::RESUME_REVIEW), Some(TierName::Career));
        assert_eq!(r.required_tier("teleportation"), None);
    }

    #[test]
    fn quota_scenario_across_tiers() {
        let r = resolver();
        let user = UserId::new("user-1").unwrap();
        let sub = |tier| UserSubscription::activate(user.clone(), SubscriptionTier::builtin(tier));

        assert_eq!(r.quotas(Some(&sub(TierName::Starter))).max_listings, 1);
        assert_eq!(r.quotas(Some(&sub(TierName::Creator))).max_listings, 10);
        assert_eq!(r.listing_banner(Some(&sub(TierName::Career)), 3), None);
        assert_eq!(r.quotas(None), Quotas::none());
    }

    proptest! {
        #[test]
        fn known_tier_access_matches_table(tier_idx in 0usize..3, feature_idx in 0usize..10) {
            let r = resolver();
            let tier = TierName::ALL[tier_idx].as_str();
            let feature = ALL_FEATURES[feature_idx];
            let expected = r.table().features_for(tier).contains(feature);
            prop_assert_eq!(r.can_access(Some(tier), feature), expected);
        }

        #[test]
        fn absent_tier_never_grants(feature in "[a-z_]{1,24}") {
            prop_assert!(!resolver().can_access(None, &feature));
        }

        #[test]
        fn unknown_tier_never_grants(tier in "[a-z]{1,12}", feature in "[a-z_]{1,24}") {
            let r = resolver();
            prop_assume!(!r.table().contains_tier(&tier));
            prop_assert!(!r.can_access(Some(tier.as_str()), &feature));
        }

        #[test]
        fn access_is_monotonic_in_rank(feature_idx in 0usize..10) {
            let r = resolver();
            let feature = ALL_FEATURES[feature_idx];
            let grants: Vec<bool> = TierName::ALL
                .iter()
                .map(|t| r.can_access(Some(t.as_str()), feature))
                .collect();
            for pair in grants.windows(2) {
                prop_assert!(!pair[0] || pair[1]);
            }
        }
    }
}

//! FeatureAccessService - per-user feature gating.
//!
//! Combines the pure resolver with the subscription reader. UI handlers get
//! this injected instead of looking up tier state themselves.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::Serialize;

use super::{AccessDecision, DenialReason};
use crate::domain::access::{FeatureAccessResolver, FeatureId};
use crate::domain::foundation::{AuthenticatedUser, DomainError};
use crate::domain::subscription::{ListingBanner, Quotas, SubscriptionTier, UserSubscription};
use crate::ports::SubscriptionReader;

/// Everything the UI needs to gate a page for one user.
#[derive(Debug, Clone, Serialize)]
pub struct AccessSnapshot {
    /// Tier identifier in effect; `None` means no tier.
    pub tier: Option<String>,
    pub features: BTreeSet<FeatureId>,
    pub quotas: Quotas,
    #[serde(skip)]
    subscription: Option<UserSubscription>,
}

impl AccessSnapshot {
    /// Snapshot for a user with no tier.
    pub fn no_tier() -> Self {
        Self {
            tier: None,
            features: BTreeSet::new(),
            quotas: Quotas::none(),
            subscription: None,
        }
    }

    pub fn can_access(&self, feature: &str) -> bool {
        self.features.contains(feature)
    }

    pub fn listing_banner(&self, used_listings: u32) -> Option<ListingBanner> {
        ListingBanner::for_subscription(self.subscription.as_ref(), used_listings)
    }

    pub fn subscription(&self) -> Option<&UserSubscription> {
        self.subscription.as_ref()
    }
}

/// A decision together with the tier it was made against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureCheck {
    pub tier: Option<String>,
    pub decision: AccessDecision,
}

pub struct FeatureAccessService {
    resolver: FeatureAccessResolver,
    reader: Arc<dyn SubscriptionReader>,
}

impl FeatureAccessService {
    pub fn new(resolver: FeatureAccessResolver, reader: Arc<dyn SubscriptionReader>) -> Self {
        Self { resolver, reader }
    }

    pub fn resolver(&self) -> &FeatureAccessResolver {
        &self.resolver
    }

    /// Loads the user's active subscription and resolves it.
    ///
    /// A signed-out caller (`None`) gets the no-tier snapshot without any
    /// backend call.
    ///
    /// # Errors
    ///
    /// Returns the reader's error when the subscription cannot be loaded.
    pub async fn snapshot(&self, user: Option<&AuthenticatedUser>) -> Result<AccessSnapshot, DomainError> {
        let Some(user) = user else {
            return Ok(AccessSnapshot::no_tier());
        };

        let subscription = self
            .reader
            .find_active(user)
            .await?
            .filter(UserSubscription::is_active);

        let tier = subscription
            .as_ref()
            .and_then(UserSubscription::active_tier_id)
            .map(str::to_string);
        let features = self.resolver.permissions_for(tier.as_deref()).clone();
        let quotas = self.resolver.quotas(subscription.as_ref());

        tracing::debug!(user_id = %user.id, tier = ?tier, "resolved feature access");

        Ok(AccessSnapshot {
            tier,
            features,
            quotas,
            subscription,
        })
    }

    /// Decides whether the user may use `feature`.
    ///
    /// Fails closed: if the subscription cannot be loaded the error is logged
    /// and access is denied.
    pub async fn check(&self, user: Option<&AuthenticatedUser>, feature: &str) -> AccessDecision {
        self.check_detailed(user, feature).await.decision
    }

    /// Like [`FeatureAccessService::check`], also reporting the tier the
    /// decision was made against.
    pub async fn check_detailed(&self, user: Option<&AuthenticatedUser>, feature: &str) -> FeatureCheck {
        let snapshot = match self.snapshot(user).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(error = %e, feature, "subscription lookup failed, denying access");
                return FeatureCheck {
                    tier: None,
                    decision: AccessDecision::Denied(DenialReason::SubscriptionUnavailable),
                };
            }
        };

        let decision = if snapshot.can_access(feature) {
            AccessDecision::Allowed
        } else {
            match &snapshot.tier {
                None => AccessDecision::Denied(DenialReason::NoSubscription),
                Some(tier) => AccessDecision::Denied(DenialReason::FeatureNotIncluded {
                    feature: feature.to_string(),
                    tier: tier.clone(),
                    required_tier: self.resolver.required_tier(feature),
                }),
            }
        };

        FeatureCheck {
            tier: snapshot.tier,
            decision,
        }
    }

    /// Quotas of the user's tier; zero for no tier.
    pub async fn quotas(&self, user: Option<&AuthenticatedUser>) -> Result<Quotas, DomainError> {
        Ok(self.snapshot(user).await?.quotas)
    }

    /// Dashboard listing banner; `None` when the user's tier suppresses it.
    pub async fn listing_banner(
        &self,
        user: Option<&AuthenticatedUser>,
        used_listings: u32,
    ) -> Result<Option<ListingBanner>, DomainError> {
        Ok(self.snapshot(user).await?.listing_banner(used_listings))
    }

    /// Tier definitions on sale, least to most permissive.
    pub async fn tier_catalog(&self) -> Result<Vec<SubscriptionTier>, DomainError> {
        let mut tiers = self.reader.list_tiers().await?;
        tiers.sort_by_key(|t| t.tier_name().map(|n| n.rank()).unwrap_or(u8::MAX));
        Ok(tiers)
    }
}

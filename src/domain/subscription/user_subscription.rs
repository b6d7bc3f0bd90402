//! UserSubscription entity.
//!
//! Links one user to exactly one tier. Created on signup or upgrade, its
//! tier is replaced on plan changes. Readers only ever care about the
//! active row.

use crate::domain::foundation::{
    DomainError, ErrorCode, StateMachine, SubscriptionId, Timestamp, UserId,
};
use serde::{Deserialize, Serialize};

use super::{SubscriptionStatus, SubscriptionTier};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSubscription {
    pub id: SubscriptionId,
    pub user_id: UserId,
    /// The tier row joined in by the subscription query.
    pub tier: SubscriptionTier,
    pub status: SubscriptionStatus,
    pub started_at: Timestamp,
    pub updated_at: Timestamp,
}

impl UserSubscription {
    /// A fresh active subscription, as created on signup.
    pub fn activate(user_id: UserId, tier: SubscriptionTier) -> Self {
        let now = Timestamp::now();
        Self {
            id: SubscriptionId::new(),
            user_id,
            tier,
            status: SubscriptionStatus::Active,
            started_at: now,
            updated_at: now,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// The tier currently in effect, `None` unless the subscription is active.
    pub fn active_tier(&self) -> Option<&SubscriptionTier> {
        self.is_active().then_some(&self.tier)
    }

    /// Identifier of the tier in effect, as fed to the feature resolver.
    pub fn active_tier_id(&self) -> Option<&str> {
        self.active_tier().map(|t| t.name.as_str())
    }

    /// Moves the user onto another tier (upgrade or downgrade).
    ///
    /// # Errors
    ///
    /// `InvalidStateTransition` unless the subscription is active.
    pub fn change_tier(&mut self, tier: SubscriptionTier) -> Result<(), DomainError> {
        if !self.is_active() {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Cannot change tier of a {:?} subscription", self.status),
            ));
        }
        self.tier = tier;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    pub fn expire(&mut self) -> Result<(), DomainError> {
        self.move_to(SubscriptionStatus::Expired)
    }

    pub fn cancel(&mut self) -> Result<(), DomainError> {
        self.move_to(SubscriptionStatus::Cancelled)
    }

    pub fn reactivate(&mut self) -> Result<(), DomainError> {
        self.move_to(SubscriptionStatus::Active)
    }

    fn move_to(&mut self, target: SubscriptionStatus) -> Result<(), DomainError> {
        self.status = self.status.transition_to(target).map_err(|e| {
            DomainError::new(ErrorCode::InvalidStateTransition, e.to_string())
        })?;
        self.updated_at = Timestamp::now();
        Ok(())
    }
}

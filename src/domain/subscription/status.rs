//! Subscription status state machine.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a user's subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    /// Paid up (or free tier) and in effect.
    Active,

    /// Billing period ended without renewal.
    Expired,

    /// User cancelled. No longer in effect.
    Cancelled,
}

impl SubscriptionStatus {
    /// Only active subscriptions feed the feature resolver.
    pub fn is_active(&self) -> bool {
        matches!(self, SubscriptionStatus::Active)
    }
}

impl StateMachine for SubscriptionStatus {
    fn successors(&self) -> &'static [Self] {
        use SubscriptionStatus::*;
        match self {
            Active => &[Expired, Cancelled],
            Expired | Cancelled => &[Active],
        }
    }
}

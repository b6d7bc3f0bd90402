//! Referral contest standing.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Money;

/// A user's standing in the referral contest.
///
/// Recomputed by the backend on every completed referral; read-only here.
/// The eligibility threshold lives server-side, so `is_eligible` is taken
/// as reported rather than derived from the count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferralContestStatus {
    pub referral_count: u32,
    pub is_eligible: bool,
    pub prize: Money,
}

impl ReferralContestStatus {
    /// Standing of a user with no completed referrals yet.
    pub fn empty(prize: Money) -> Self {
        Self {
            referral_count: 0,
            is_eligible: false,
            prize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_standing_is_not_eligible() {
        let status = ReferralContestStatus::empty(Money::new(500_000, "INR"));
        assert_eq!(status.referral_count, 0);
        assert!(!status.is_eligible);
    }
}

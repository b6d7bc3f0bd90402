//! Referral entity.
//!
//! Created when a user submits an invite, moved to `completed` when the
//! invitee signs up (an event that happens in the backend), never deleted.

use crate::domain::foundation::{
    DomainError, ErrorCode, ReferralId, StateMachine, Timestamp, UserId,
};
use serde::{Deserialize, Serialize};

use super::{ReferralCode, ReferralStatus, ReferredEmail};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Referral {
    pub id: ReferralId,
    pub referrer_user_id: UserId,
    pub referred_email: ReferredEmail,
    pub referral_code: ReferralCode,
    pub status: ReferralStatus,
    pub created_at: Timestamp,
    pub completed_at: Option<Timestamp>,
}

impl Referral {
    /// Marks the invite as redeemed.
    pub fn complete(&mut self, at: Timestamp) -> Result<(), DomainError> {
        self.move_to(ReferralStatus::Completed)?;
        self.completed_at = Some(at);
        Ok(())
    }

    /// Marks the invite as lapsed.
    pub fn expire(&mut self) -> Result<(), DomainError> {
        self.move_to(ReferralStatus::Expired)
    }

    pub fn is_pending(&self) -> bool {
        self.status == ReferralStatus::Pending
    }

    fn move_to(&mut self, target: ReferralStatus) -> Result<(), DomainError> {
        self.status = self.status.transition_to(target).map_err(|e| {
            DomainError::new(ErrorCode::InvalidStateTransition, e.to_string())
                .with_detail("referral_id", self.id.to_string())
        })?;
        Ok(())
    }
}

/// The fields a client supplies when inviting someone.
///
/// Everything else (id, status, timestamps) is assigned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReferral {
    pub referrer_user_id: UserId,
    pub referred_email: ReferredEmail,
    pub referral_code: ReferralCode,
}

impl NewReferral {
    /// The row as the backend would store it: pending, created now.
    pub fn into_pending(self, id: ReferralId, created_at: Timestamp) -> Referral {
        Referral {
            id,
            referrer_user_id: self.referrer_user_id,
            referred_email: self.referred_email,
            referral_code: self.referral_code,
            status: ReferralStatus::Pending,
            created_at,
            completed_at: None,
        }
    }
}

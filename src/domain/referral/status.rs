//! Referral status state machine.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};

/// Where an invitation stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferralStatus {
    /// Invite sent, invitee has not signed up yet.
    Pending,

    /// Invitee signed up with the code.
    Completed,

    /// Invite lapsed without a signup.
    Expired,
}

impl StateMachine for ReferralStatus {
    fn successors(&self) -> &'static [Self] {
        use ReferralStatus::*;
        match self {
            Pending => &[Completed, Expired],
            Completed | Expired => &[],
        }
    }
}

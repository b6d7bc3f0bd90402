//! Session-scoped referral ports.
//!
//! Referral calls run as the signed-in user so the backend's row-level
//! policies apply. A provider hands out repository and code-generator
//! instances bound to one user's session.

use std::sync::Arc;

use crate::domain::foundation::AuthenticatedUser;

use super::{ReferralCodeGenerator, ReferralRepository};

/// Referral ports bound to a single user session.
#[derive(Clone)]
pub struct ReferralPorts {
    pub repository: Arc<dyn ReferralRepository>,
    pub code_generator: Arc<dyn ReferralCodeGenerator>,
}

pub trait ReferralPortsProvider: Send + Sync {
    /// Ports acting on behalf of `user`.
    fn for_user(&self, user: &AuthenticatedUser) -> ReferralPorts;
}

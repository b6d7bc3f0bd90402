//! Referral code generation port.
//!
//! Wraps the backend's code-issuing procedure. It takes no arguments: the
//! backend works out who is asking from the session the adapter carries,
//! and hands back a fresh code on every call.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::referral::ReferralCode;

#[async_trait]
pub trait ReferralCodeGenerator: Send + Sync {
    async fn generate(&self) -> Result<ReferralCode, DomainError>;
}

//! Referral repository port.
//!
//! CRUD over the referral table plus the two read models that sit next to
//! it: the user's issued code and their contest standing.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::referral::{NewReferral, Referral, ReferralCode, ReferralContestStatus};

#[async_trait]
pub trait ReferralRepository: Send + Sync {
    /// Inserts a pending referral and returns the stored row.
    ///
    /// No idempotency is promised here: uniqueness, if any, is enforced by
    /// the table itself.
    async fn insert(&self, referral: NewReferral) -> Result<Referral, DomainError>;

    /// All referrals sent by `referrer`, newest first.
    async fn list_by_referrer(&self, referrer: &UserId) -> Result<Vec<Referral>, DomainError>;

    /// The code previously issued to `user`, if any.
    async fn find_code(&self, user: &UserId) -> Result<Option<ReferralCode>, DomainError>;

    /// Contest standing for `user`; `None` before the first referral.
    async fn contest_status(
        &self,
        user: &UserId,
    ) -> Result<Option<ReferralContestStatus>, DomainError>;
}

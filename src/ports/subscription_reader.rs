//! Subscription reader port.
//!
//! Read-only access to the subscription data source. The feature-access
//! service depends on this to find a user's tier.
//!
//! # Contract
//!
//! - `find_active` returns `Ok(None)` when the user has no active row. That
//!   is a valid state ("no tier"), not an error.
//! - `find_active` reads on behalf of the signed-in user, so owner-only row
//!   policies apply to it.
//! - Remote failures come back as `DomainError` with `ErrorCode::BackendError`.

use async_trait::async_trait;

use crate::domain::foundation::{AuthenticatedUser, DomainError};
use crate::domain::subscription::{SubscriptionTier, UserSubscription};

#[async_trait]
pub trait SubscriptionReader: Send + Sync {
    /// The user's active subscription with its tier joined in.
    async fn find_active(
        &self,
        user: &AuthenticatedUser,
    ) -> Result<Option<UserSubscription>, DomainError>;

    /// Every tier definition on sale, for the pricing page.
    async fn list_tiers(&self) -> Result<Vec<SubscriptionTier>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscription_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn SubscriptionReader) {}
    }
}

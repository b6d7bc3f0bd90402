//! Backend implementation of `SubscriptionReader`.

use async_trait::async_trait;

use super::rows::{SubscriptionRow, TierRow};
use super::BackendClient;
use crate::domain::foundation::{AuthenticatedUser, DomainError, UserId};
use crate::domain::subscription::{SubscriptionTier, UserSubscription};
use crate::ports::SubscriptionReader;

/// Subscriptions are read with the caller's access token so owner-only row
/// policies match. The public tier catalog is read with the anon key.
#[derive(Debug, Clone)]
pub struct BackendSubscriptionReader {
    client: BackendClient,
}

impl BackendSubscriptionReader {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

pub(crate) fn active_subscription_path(user_id: &UserId) -> String {
    format!(
        "user_subscriptions?user_id=eq.{}&status=eq.active&select=*,tier:subscription_tiers(*)",
        user_id
    )
}

#[async_trait]
impl SubscriptionReader for BackendSubscriptionReader {
    async fn find_active(
        &self,
        user: &AuthenticatedUser,
    ) -> Result<Option<UserSubscription>, DomainError> {
        let rows: Vec<SubscriptionRow> = self
            .client
            .select(&active_subscription_path(&user.id), user.access_token())
            .await?;

        if rows.len() > 1 {
            tracing::warn!(user_id = %user.id, count = rows.len(), "several active subscriptions, using the first");
        }
        match rows.into_iter().next() {
            Some(row) => row.into_domain(),
            None => Ok(None),
        }
    }

    async fn list_tiers(&self) -> Result<Vec<SubscriptionTier>, DomainError> {
        let rows: Vec<TierRow> = self
            .client
            .select("subscription_tiers?select=*", self.client.anon_bearer())
            .await?;
        Ok(rows.into_iter().map(SubscriptionTier::from).collect())
    }
}

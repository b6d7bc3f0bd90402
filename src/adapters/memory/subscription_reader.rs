//! In-memory subscription reader for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{AuthenticatedUser, DomainError, UserId};
use crate::domain::subscription::{SubscriptionTier, TierName, UserSubscription};
use crate::ports::SubscriptionReader;

#[derive(Debug, Clone)]
pub struct InMemorySubscriptionReader {
    subscriptions: Arc<RwLock<HashMap<UserId, UserSubscription>>>,
    tiers: Arc<Vec<SubscriptionTier>>,
}

impl InMemorySubscriptionReader {
    /// Empty store selling the built-in tier definitions.
    pub fn new() -> Self {
        Self {
            subscriptions: Arc::new(RwLock::new(HashMap::new())),
            tiers: Arc::new(TierName::ALL.iter().map(|t| SubscriptionTier::builtin(*t)).collect()),
        }
    }

    /// Stores `subscription`, replacing the user's previous one.
    pub async fn put(&self, subscription: UserSubscription) {
        self.subscriptions
            .write()
            .await
            .insert(subscription.user_id.clone(), subscription);
    }

    /// Puts `user_id` on a fresh active subscription to `tier`.
    pub async fn subscribe(&self, user_id: UserId, tier: TierName) -> UserSubscription {
        let subscription = UserSubscription::activate(user_id, SubscriptionTier::builtin(tier));
        self.put(subscription.clone()).await;
        subscription
    }

    pub async fn remove(&self, user_id: &UserId) {
        self.subscriptions.write().await.remove(user_id);
    }
}

impl Default for InMemorySubscriptionReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubscriptionReader for InMemorySubscriptionReader {
    async fn find_active(
        &self,
        user: &AuthenticatedUser,
    ) -> Result<Option<UserSubscription>, DomainError> {
        Ok(self
            .subscriptions
            .read()
            .await
            .get(&user.id)
            .filter(|s| s.is_active())
            .cloned())
    }

    async fn list_tiers(&self) -> Result<Vec<SubscriptionTier>, DomainError> {
        Ok(self.tiers.as_ref().clone())
    }
}

//! In-memory referral store for testing and development.
//!
//! One store holds every user's referrals, codes and contest standing.
//! `for_user` hands out ports scoped to a single user, mirroring what the
//! backend's row-level policies do.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::foundation::{
    AuthenticatedUser, DomainError, ErrorCode, Money, ReferralId, Timestamp, UserId,
};
use crate::domain::referral::{NewReferral, Referral, ReferralCode, ReferralContestStatus};
use crate::ports::{
    ReferralCodeGenerator, ReferralPorts, ReferralPortsProvider, ReferralRepository,
};

/// Completed referrals needed before the contest marks a user eligible.
const CONTEST_THRESHOLD: u32 = 5;

#[derive(Debug, Default)]
struct StoreData {
    referrals: Vec<Referral>,
    codes: HashMap<UserId, ReferralCode>,
}

#[derive(Debug, Clone)]
pub struct InMemoryReferralStore {
    data: Arc<RwLock<StoreData>>,
    calls: Arc<AtomicUsize>,
    prize: Money,
}

impl InMemoryReferralStore {
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(StoreData::default())),
            calls: Arc::new(AtomicUsize::new(0)),
            prize: Money::new(500_000, "INR"),
        }
    }

    /// Pre-issues `code` to `user`.
    pub async fn issue_code(&self, user: UserId, code: ReferralCode) {
        self.data.write().await.codes.insert(user, code);
    }

    /// Marks a referral as redeemed, as the signup trigger would.
    pub async fn complete(&self, id: &ReferralId) -> Result<(), DomainError> {
        let mut data = self.data.write().await;
        let referral = data
            .referrals
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| DomainError::new(ErrorCode::ReferralNotFound, "Referral not found"))?;
        referral.complete(Timestamp::now())
    }

    /// Number of port calls served so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn referral_count(&self) -> usize {
        self.data.read().await.referrals.len()
    }

    fn count_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

impl Default for InMemoryReferralStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferralPortsProvider for InMemoryReferralStore {
    fn for_user(&self, user: &AuthenticatedUser) -> ReferralPorts {
        let session = Arc::new(InMemoryReferralSession {
            store: self.clone(),
            user: user.id.clone(),
        });
        ReferralPorts {
            repository: session.clone(),
            code_generator: session,
        }
    }
}

/// The store as seen by one user.
#[derive(Debug)]
pub struct InMemoryReferralSession {
    store: InMemoryReferralStore,
    user: UserId,
}

impl InMemoryReferralSession {
    fn ensure_own(&self, user: &UserId) -> Result<(), DomainError> {
        if user != &self.user {
            return Err(DomainError::new(
                ErrorCode::Forbidden,
                "Cannot read another user's referrals",
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl ReferralRepository for InMemoryReferralSession {
    async fn insert(&self, referral: NewReferral) -> Result<Referral, DomainError> {
        self.store.count_call();
        self.ensure_own(&referral.referrer_user_id)?;
        let row = referral.into_pending(ReferralId::new(), Timestamp::now());
        self.store.data.write().await.referrals.push(row.clone());
        Ok(row)
    }

    async fn list_by_referrer(&self, referrer: &UserId) -> Result<Vec<Referral>, DomainError> {
        self.store.count_call();
        self.ensure_own(referrer)?;
        let mut rows: Vec<Referral> = self
            .store
            .data
            .read()
            .await
            .referrals
            .iter()
            .filter(|r| &r.referrer_user_id == referrer)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn find_code(&self, user: &UserId) -> Result<Option<ReferralCode>, DomainError> {
        self.store.count_call();
        self.ensure_own(user)?;
        Ok(self.store.data.read().await.codes.get(user).cloned())
    }

    async fn contest_status(
        &self,
        user: &UserId,
    ) -> Result<Option<ReferralContestStatus>, DomainError> {
        self.store.count_call();
        self.ensure_own(user)?;
        let completed = self
            .store
            .data
            .read()
            .await
            .referrals
            .iter()
            .filter(|r| &r.referrer_user_id == user && r.completed_at.is_some())
            .count() as u32;
        Ok(Some(ReferralContestStatus {
            referral_count: completed,
            is_eligible: completed >= CONTEST_THRESHOLD,
            prize: self.store.prize.clone(),
        }))
    }
}

/// Issues a fresh code on every call, replacing the user's current one,
/// like the backend's code function.
#[async_trait]
impl ReferralCodeGenerator for InMemoryReferralSession {
    async fn generate(&self) -> Result<ReferralCode, DomainError> {
        self.store.count_call();
        let raw = Uuid::new_v4().simple().to_string();
        let code = ReferralCode::new(raw[..8].to_uppercase())?;
        self.store
            .data
            .write()
            .await
            .codes
            .insert(self.user.clone(), code.clone());
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::referral::ReferredEmail;

    fn user(id: &str) -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new(id).unwrap(), None, "token")
    }

    fn new_referral(referrer: &str, email: &str) -> NewReferral {
        NewReferral {
            referrer_user_id: UserId::new(referrer).unwrap(),
            referred_email: ReferredEmail::new(email).unwrap(),
            referral_code: ReferralCode::new("ABC123").unwrap(),
        }
    }

    #[tokio::test]
    async fn each_generation_issues_a_new_code() {
        let store = InMemoryReferralStore::new();
        let ports = store.for_user(&user("u-1"));
        let u1 = UserId::new("u-1").unwrap();

        let first = ports.code_generator.generate().await.unwrap();
        let second = ports.code_generator.generate().await.unwrap();

        assert_ne!(first, second);
        assert_eq!(first.as_str().len(), 8);
        assert_eq!(ports.repository.find_code(&u1).await.unwrap(), Some(second));
    }

    #[tokio::test]
    async fn users_only_see_their_own_rows() {
        let store = InMemoryReferralStore::new();
        let alice = store.for_user(&user("alice"));
        let bob = store.for_user(&user("bob"));

        alice
            .repository
            .insert(new_referral("alice", "friend@example.com"))
            .await
            .unwrap();

        let bob_id = UserId::new("bob").unwrap();
        assert!(bob.repository.list_by_referrer(&bob_id).await.unwrap().is_empty());

        let alice_id = UserId::new("alice").unwrap();
        let err = bob.repository.list_by_referrer(&alice_id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }

    #[tokio::test]
    async fn completed_referrals_count_towards_contest() {
        let store = InMemoryReferralStore::new();
        let ports = store.for_user(&user("alice"));
        let alice_id = UserId::new("alice").unwrap();

        let row = ports
            .repository
            .insert(new_referral("alice", "friend@example.com"))
            .await
            .unwrap();
        store.complete(&row.id).await.unwrap();

        let status = ports.repository.contest_status(&alice_id).await.unwrap().unwrap();
        assert_eq!(status.referral_count, 1);
        assert!(!status.is_eligible);
    }
}

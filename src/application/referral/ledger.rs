//! ReferralLedger - the signed-in user's referral state.
//!
//! Holds the issued referral code, the list of invites the user has sent and
//! their contest standing. Writes always go through the backend and are
//! followed by a full re-fetch; the ledger never appends optimistically.
//!
//! A ledger is bound to one screen or request. Once `detach()` is called,
//! results of calls still in flight are dropped instead of written back.

use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;
use tokio::sync::RwLock;

use crate::domain::foundation::UserId;
use crate::domain::referral::{
    NewReferral, Referral, ReferralCode, ReferralContestStatus, ReferralError,
    ReferralLinkBuilder, ReferredEmail,
};
use crate::ports::ReferralPorts;

/// The signed-in user and the ports acting on their behalf.
#[derive(Clone)]
pub struct LedgerSession {
    pub user_id: UserId,
    pub ports: ReferralPorts,
}

#[derive(Debug, Clone, Default)]
struct LedgerState {
    code: Option<ReferralCode>,
    referrals: Vec<Referral>,
    contest: Option<ReferralContestStatus>,
}

/// Read-only copy of the ledger for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerView {
    pub referral_code: Option<ReferralCode>,
    /// Shareable link; empty until a code has been issued.
    pub referral_link: String,
    pub referrals: Vec<Referral>,
    pub contest: Option<ReferralContestStatus>,
}

pub struct ReferralLedger {
    session: Option<LedgerSession>,
    links: ReferralLinkBuilder,
    state: RwLock<LedgerState>,
    alive: AtomicBool,
}

impl ReferralLedger {
    /// A ledger for `session`; `None` when nobody is signed in.
    pub fn new(session: Option<LedgerSession>, links: ReferralLinkBuilder) -> Self {
        Self {
            session,
            links,
            state: RwLock::new(LedgerState::default()),
            alive: AtomicBool::new(true),
        }
    }

    /// Marks the ledger as gone. Later results are discarded.
    pub fn detach(&self) {
        self.alive.store(false, Ordering::SeqCst);
    }

    pub fn is_attached(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }

    /// Loads the issued code, the invite list (newest first) and the contest
    /// standing in one go.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session, `Backend` if any of the three
    /// reads fail. State is left untouched on error.
    pub async fn refresh(&self) -> Result<(), ReferralError> {
        let session = self.session()?;
        let repository = &session.ports.repository;

        let loaded = futures::try_join!(
            repository.find_code(&session.user_id),
            repository.list_by_referrer(&session.user_id),
            repository.contest_status(&session.user_id),
        );
        let (code, referrals, contest) = match loaded {
            Ok(loaded) => loaded,
            Err(e) => {
                tracing::warn!(user_id = %session.user_id, error = %e, "failed to load referrals");
                return Err(e.into());
            }
        };

        if !self.is_attached() {
            tracing::debug!(user_id = %session.user_id, "ledger detached, dropping refresh");
            return Ok(());
        }

        let mut state = self.state.write().await;
        state.code = code;
        state.referrals = referrals;
        state.contest = contest;
        Ok(())
    }

    /// Asks the backend for a fresh referral code.
    ///
    /// Failures are logged and yield `None`; there is no retry.
    pub async fn generate_code(&self) -> Option<ReferralCode> {
        let Ok(session) = self.session() else {
            tracing::debug!("code generation requested without a session");
            return None;
        };

        let code = match session.ports.code_generator.generate().await {
            Ok(code) => code,
            Err(e) => {
                tracing::error!(user_id = %session.user_id, error = %e, "referral code generation failed");
                return None;
            }
        };

        if self.is_attached() {
            self.state.write().await.code = Some(code.clone());
        }
        tracing::info!(user_id = %session.user_id, "referral code issued");
        Some(code)
    }

    /// Invites `email` under the user's referral code.
    ///
    /// The signed-in user and an issued code are checked first; if either is
    /// missing this fails without touching the network. On success the full
    /// invite list is re-fetched. Nothing de-duplicates concurrent submits.
    ///
    /// # Errors
    ///
    /// - `NotAuthenticated` / `MissingReferralCode` before any call
    /// - `InvalidEmail` for a malformed address, before any call
    /// - `Backend` with the backend's message if the insert fails
    pub async fn create_referral(&self, email: &str) -> Result<Referral, ReferralError> {
        let session = self.session()?;
        let code = self
            .state
            .read()
            .await
            .code
            .clone()
            .ok_or(ReferralError::MissingReferralCode)?;
        let referred_email = ReferredEmail::new(email).map_err(ReferralError::InvalidEmail)?;

        let created = session
            .ports
            .repository
            .insert(NewReferral {
                referrer_user_id: session.user_id.clone(),
                referred_email,
                referral_code: code,
            })
            .await
            .map_err(|e| {
                tracing::warn!(user_id = %session.user_id, error = %e, "referral insert failed");
                ReferralError::from(e)
            })?;

        tracing::info!(
            user_id = %session.user_id,
            referral_id = %created.id,
            "referral created"
        );

        // The insert stands even if the re-fetch fails; the list catches up
        // on the next refresh.
        if let Err(e) = self.refresh().await {
            tracing::warn!(error = %e, "re-fetch after referral insert failed");
        }

        Ok(created)
    }

    /// The shareable link for the current code, or `""` without one.
    pub async fn referral_link(&self) -> String {
        let state = self.state.read().await;
        self.links
            .derive(state.code.as_ref().map(ReferralCode::as_str).unwrap_or(""))
    }

    pub async fn view(&self) -> LedgerView {
        let state = self.state.read().await;
        LedgerView {
            referral_link: self
                .links
                .derive(state.code.as_ref().map(ReferralCode::as_str).unwrap_or("")),
            referral_code: state.code.clone(),
            referrals: state.referrals.clone(),
            contest: state.contest.clone(),
        }
    }

    fn session(&self) -> Result<&LedgerSession, ReferralError> {
        self.session.as_ref().ok_or(ReferralError::NotAuthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, Money, ReferralId, Timestamp};
    use crate::ports::{ReferralCodeGenerator, ReferralRepository};
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;
    use std::sync::{Arc, Mutex};

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementations
    // ════════════════════════════════════════════════════════════════════════════

    #[derive(Default)]
    struct MockReferralBackend {
        code: Mutex<Option<ReferralCode>>,
        rows: Mutex<Vec<Referral>>,
        calls: AtomicUsize,
        fail_insert: bool,
        fail_reads: bool,
        fail_generate: bool,
    }

    impl MockReferralBackend {
        fn with_code(code: &str) -> Self {
            let backend = Self::default();
            *backend.code.lock().unwrap() = Some(ReferralCode::new(code).unwrap());
            backend
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn hit(&self) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl ReferralRepository for MockReferralBackend {
        async fn insert(&self, referral: NewReferral) -> Result<Referral, DomainError> {
            self.hit();
            if self.fail_insert {
                return Err(DomainError::backend("duplicate key value violates unique constraint"));
            }
            let row = referral.into_pending(ReferralId::new(), Timestamp::now());
            self.rows.lock().unwrap().insert(0, row.clone());
            Ok(row)
        }

        async fn list_by_referrer(&self, referrer: &UserId) -> Result<Vec<Referral>, DomainError> {
            self.hit();
            if self.fail_reads {
                return Err(DomainError::backend("connection reset"));
            }
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|r| &r.referrer_user_id == referrer)
                .cloned()
                .collect())
        }

        async fn find_code(&self, _user: &UserId) -> Result<Option<ReferralCode>, DomainError> {
            self.hit();
            if self.fail_reads {
                return Err(DomainError::backend("connection reset"));
            }
            Ok(self.code.lock().unwrap().clone())
        }

        async fn contest_status(
            &self,
            _user: &UserId,
        ) -> Result<Option<ReferralContestStatus>, DomainError> {
            self.hit();
            if self.fail_reads {
                return Err(DomainError::backend("connection reset"));
            }
            let count = self.rows.lock().unwrap().len() as u32;
            Ok(Some(ReferralContestStatus {
                referral_count: count,
                is_eligible: count >= 5,
                prize: Money::new(500_000, "INR"),
            }))
        }
    }

    #[async_trait]
    impl ReferralCodeGenerator for MockReferralBackend {
        async fn generate(&self) -> Result<ReferralCode, DomainError> {
            self.hit();
            if self.fail_generate {
                return Err(DomainError::backend("function generate_referral_code failed"));
            }
            let code = ReferralCode::new("FRESH42").unwrap();
            *self.code.lock().unwrap() = Some(code.clone());
            Ok(code)
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn links() -> ReferralLinkBuilder {
        ReferralLinkBuilder::new("https://campus.example")
    }

    fn ledger(backend: &Arc<MockReferralBackend>) -> ReferralLedger {
        let session = LedgerSession {
            user_id: UserId::new("student-1").unwrap(),
            ports: ReferralPorts {
                repository: backend.clone(),
                code_generator: backend.clone(),
            },
        };
        ReferralLedger::new(Some(session), links())
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Precondition Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn create_without_session_fails_locally() {
        let ledger = ReferralLedger::new(None, links());
        let err = ledger.create_referral("friend@example.com").await.unwrap_err();
        assert!(matches!(err, ReferralError::NotAuthenticated));
        assert!(err.is_precondition());
    }

    #[tokio::test]
    async fn create_without_code_makes_no_calls() {
        let backend = Arc::new(MockReferralBackend::default());
        let ledger = ledger(&backend);

        let err = ledger.create_referral("friend@example.com").await.unwrap_err();

        assert!(matches!(err, ReferralError::MissingReferralCode));
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn invalid_email_makes_no_calls() {
        let backend = Arc::new(MockReferralBackend::with_code("ABC123"));
        let ledger = ledger(&backend);
        ledger.refresh().await.unwrap();
        let before = backend.calls();

        let err = ledger.create_referral("not-an-email").await.unwrap_err();

        assert!(matches!(err, ReferralError::InvalidEmail(_)));
        assert_eq!(backend.calls(), before);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Create Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn create_inserts_pending_and_refetches() {
        let backend = Arc::new(MockReferralBackend::with_code("ABC123"));
        let ledger = ledger(&backend);
        ledger.refresh().await.unwrap();
        let before = backend.calls();

        let created = ledger.create_referral("Friend@Example.com").await.unwrap();

        assert!(created.is_pending());
        assert_eq!(created.referred_email.as_str(), "friend@example.com");
        assert_eq!(created.referral_code.as_str(), "ABC123");
        // one insert plus the three reads of the re-fetch
        assert_eq!(backend.calls(), before + 4);

        let view = ledger.view().await;
        assert_eq!(view.referrals.len(), 1);
        assert_eq!(view.contest.unwrap().referral_count, 1);
    }

    #[tokio::test]
    async fn double_submit_creates_two_rows() {
        let backend = Arc::new(MockReferralBackend::with_code("ABC123"));
        let ledger = ledger(&backend);
        ledger.refresh().await.unwrap();

        ledger.create_referral("friend@example.com").await.unwrap();
        ledger.create_referral("friend@example.com").await.unwrap();

        assert_eq!(ledger.view().await.referrals.len(), 2);
    }

    #[tokio::test]
    async fn failed_insert_leaves_state_unchanged() {
        let backend = Arc::new(MockReferralBackend {
            fail_insert: true,
            ..MockReferralBackend::with_code("ABC123")
        });
        let ledger = ledger(&backend);
        ledger.refresh().await.unwrap();
        let before = ledger.view().await;

        let err = ledger.create_referral("friend@example.com").await.unwrap_err();

        assert!(matches!(err, ReferralError::Backend(ref m) if m.contains("duplicate key")));
        assert_eq!(ledger.view().await, before);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Refresh / Code Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn refresh_loads_code_and_link() {
        let backend = Arc::new(MockReferralBackend::with_code("ABC123"));
        let ledger = ledger(&backend);
        assert_eq!(ledger.referral_link().await, "");

        ledger.refresh().await.unwrap();

        assert_eq!(
            ledger.referral_link().await,
            "https://campus.example/auth?ref=ABC123"
        );
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_state() {
        let backend = Arc::new(MockReferralBackend {
            fail_reads: true,
            ..MockReferralBackend::default()
        });
        let ledger = ledger(&backend);

        let err = ledger.refresh().await.unwrap_err();

        assert!(matches!(err, ReferralError::Backend(_)));
        assert_eq!(ledger.view().await.referral_code, None);
    }

    #[tokio::test]
    async fn generated_code_enables_invites() {
        let backend = Arc::new(MockReferralBackend::default());
        let ledger = ledger(&backend);

        let code = ledger.generate_code().await.unwrap();
        assert_eq!(code.as_str(), "FRESH42");

        assert!(ledger.create_referral("friend@example.com").await.is_ok());
    }

    #[tokio::test]
    async fn failed_generation_returns_none_once() {
        let backend = Arc::new(MockReferralBackend {
            fail_generate: true,
            ..MockReferralBackend::default()
        });
        let ledger = ledger(&backend);

        assert_eq!(ledger.generate_code().await, None);
        assert_eq!(backend.calls(), 1);
        assert_eq!(ledger.referral_link().await, "");
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Liveness Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn detached_ledger_drops_late_results() {
        let backend = Arc::new(MockReferralBackend::with_code("ABC123"));
        let ledger = ledger(&backend);

        ledger.detach();
        assert!(!ledger.is_attached());
        ledger.refresh().await.unwrap();
        ledger.generate_code().await.unwrap();

        assert_eq!(ledger.view().await.referral_code, None);
    }
}

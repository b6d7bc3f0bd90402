//! Shared application state handed to every handler.

use std::sync::Arc;

use crate::application::access::FeatureAccessService;
use crate::application::navigation::NavigationService;
use crate::application::referral::{LedgerSession, ReferralLedger};
use crate::domain::foundation::AuthenticatedUser;
use crate::domain::referral::ReferralLinkBuilder;
use crate::ports::ReferralPortsProvider;

/// Arc-wrapped dependencies, cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub access: Arc<FeatureAccessService>,
    pub referrals: Arc<dyn ReferralPortsProvider>,
    pub links: ReferralLinkBuilder,
    pub navigation: NavigationService,
}

impl AppState {
    /// A fresh ledger for one request. Signed-out callers get one with no
    /// session, which fails every operation locally.
    pub fn ledger_for(&self, user: Option<&AuthenticatedUser>) -> ReferralLedger {
        let session = user.map(|user| LedgerSession {
            user_id: user.id.clone(),
            ports: self.referrals.for_user(user),
        });
        ReferralLedger::new(session, self.links.clone())
    }
}

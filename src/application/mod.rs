//! Application layer - services orchestrating domain logic over ports.
//!
//! - `access` - per-user feature gating and quotas
//! - `referral` - the signed-in user's referral ledger
//! - `navigation` - route bundle prefetching

pub mod access;
pub mod navigation;
pub mod referral;

pub use access::{AccessDecision, AccessSnapshot, DenialReason, FeatureAccessService};
pub use navigation::{
    NavigationService, PrefetchCache, PrefetchOutcome, PrefetchState, RouteRegistry,
};
pub use referral::{LedgerSession, LedgerView, ReferralLedger};

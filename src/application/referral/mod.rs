//! Referral ledger for the signed-in user.

mod ledger;

pub use ledger::{LedgerSession, LedgerView, ReferralLedger};

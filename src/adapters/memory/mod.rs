//! In-memory adapters for testing and development.
//!
//! Used when no backend is configured, and by the integration tests.

mod referral_store;
mod subscription_reader;

pub use referral_store::{InMemoryReferralSession, InMemoryReferralStore};
pub use subscription_reader::InMemorySubscriptionReader;

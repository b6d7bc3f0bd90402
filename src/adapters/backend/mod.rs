//! Hosted backend adapters.
//!
//! REST implementations of the subscription and referral ports:
//!
//! - `client` - request plumbing (`apikey` + bearer headers, error mapping)
//! - `rows` - table row shapes and their domain mapping
//! - `subscription_reader` - `SubscriptionReader`
//! - `referral_store` - session-scoped `ReferralRepository` / `ReferralCodeGenerator`

mod client;
mod referral_store;
mod rows;
mod subscription_reader;

pub use client::BackendClient;
pub use referral_store::{BackendReferralPorts, BackendReferralStore};
pub use subscription_reader::BackendSubscriptionReader;

//! HTTP adapter for the referral flow.
//!
//! - `GET /api/referrals` - code, shareable link, invites and contest standing
//! - `POST /api/referrals/code` - issue a referral code
//! - `POST /api/referrals` - invite a friend by email
//!
//! Each request builds its own `ReferralLedger` bound to the caller's
//! session, loads it, and answers from it.

mod dto;
mod handlers;
mod routes;

pub use dto::*;
pub use handlers::ReferralApiError;
pub use routes::referral_routes;

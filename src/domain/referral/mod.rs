//! Referral domain module.
//!
//! Invitations, referral codes, shareable links and contest standing.
//!
//! # Module Structure
//!
//! - `referral` - Referral entity and NewReferral
//! - `status` - ReferralStatus state machine
//! - `code` - ReferralCode
//! - `email` - ReferredEmail
//! - `link` - ReferralLinkBuilder
//! - `contest` - ReferralContestStatus
//! - `errors` - ReferralError

mod code;
mod contest;
mod email;
mod errors;
mod link;
mod referral;
mod status;

pub use code::ReferralCode;
pub use contest::ReferralContestStatus;
pub use email::ReferredEmail;
pub use errors::{ReferralError, ReferralErrorBody};
pub use link::ReferralLinkBuilder;
pub use referral::{NewReferral, Referral};
pub use status::ReferralStatus;

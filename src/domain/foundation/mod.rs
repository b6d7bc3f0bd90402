//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, money, the state machine trait and
//! error types that the subscription, access and referral modules build on.

mod auth;
mod errors;
mod ids;
mod money;
mod state_machine;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ReferralId, SubscriptionId, UserId};
pub use money::Money;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;

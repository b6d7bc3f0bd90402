//! Feature access for signed-in users.

mod decision;
mod service;

pub use decision::{AccessDecision, DenialReason};
pub use service::{AccessSnapshot, FeatureAccessService, FeatureCheck};

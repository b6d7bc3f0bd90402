//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `subscription` - Tiers, user subscriptions and quotas
//! - `access` - Permission table and feature-access resolver
//! - `referral` - Invitations, codes, links and contest standing

pub mod access;
pub mod foundation;
pub mod referral;
pub mod subscription;

//! Campus Hub - feature gating and referrals for a student platform.
//!
//! Resolves which features a user's subscription tier unlocks, runs the
//! referral invitation flow against the hosted backend, and prefetches
//! route bundles ahead of navigation.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

//! Subscription domain module.
//!
//! Tier definitions, the user's subscription and the quotas derived from it.
//!
//! # Module Structure
//!
//! - `tier` - TierName, the closed set of tier identifiers
//! - `subscription_tier` - SubscriptionTier definitions (quotas, price, features)
//! - `status` - SubscriptionStatus state machine
//! - `user_subscription` - UserSubscription entity
//! - `quotas` - Quotas and the listing banner

mod quotas;
mod status;
mod subscription_tier;
mod tier;
mod user_subscription;

pub use quotas::{ListingBanner, Quotas};
pub use status::SubscriptionStatus;
pub use subscription_tier::SubscriptionTier;
pub use tier::{TierName, UnknownTier};
pub use user_subscription::UserSubscription;

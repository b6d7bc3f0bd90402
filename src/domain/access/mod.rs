//! Access domain module.
//!
//! Tier-based feature gating: which features a tier grants and how that is
//! resolved for a user.
//!
//! # Module Structure
//!
//! - `feature` - FeatureId and the well-known feature identifiers
//! - `permission_table` - validated tier → feature-set table
//! - `resolver` - FeatureAccessResolver

mod feature;
mod permission_table;
mod resolver;

pub use feature::{features, FeatureId};
pub use permission_table::{FeaturePermissionTable, PermissionTableError, TierPermissions};
pub use resolver::FeatureAccessResolver;

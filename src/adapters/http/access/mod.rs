//! HTTP adapter for feature access.
//!
//! - `GET /api/access/tiers` - tier catalog with permission sets
//! - `GET /api/access/features/:feature` - may the caller use a feature
//! - `GET /api/access/quotas` - quotas and the listing banner

mod dto;
mod handlers;
mod routes;

pub use dto::*;
pub use routes::access_routes;

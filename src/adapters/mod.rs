//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - access-token validation (JWT, mock)
//! - `backend` - the hosted backend's REST interface
//! - `memory` - in-memory stores for development and tests
//! - `navigation` - route bundle loaders
//! - `http` - the axum REST API

pub mod auth;
pub mod backend;
pub mod http;
pub mod memory;
pub mod navigation;

pub use auth::{JwtSessionValidator, MockSessionValidator};
pub use backend::{BackendClient, BackendReferralPorts, BackendSubscriptionReader};
pub use http::{build_router, AppState};
pub use memory::{InMemoryReferralStore, InMemorySubscriptionReader};
pub use navigation::{http_route_registry, HttpRouteLoader};

//! HTTP adapter for route prefetching.
//!
//! - `GET /api/navigation/routes` - prefetchable routes and their cache state
//! - `POST /api/navigation/prefetch` - warm one route's bundle

mod handlers;
mod routes;

pub use handlers::{PrefetchRequest, RouteStatus};
pub use routes::navigation_routes;

//! Route prefetching.

mod cache;
mod registry;
mod service;

pub use cache::{PrefetchCache, PrefetchState};
pub use registry::RouteRegistry;
pub use service::{NavigationService, PrefetchOutcome};

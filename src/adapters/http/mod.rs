//! HTTP adapter - REST API over axum.
//!
//! Each area has its own module with dto/handlers/routes; `router` mounts
//! them under `/api` behind the auth middleware.

pub mod access;
pub mod error;
pub mod middleware;
pub mod navigation;
pub mod referrals;
mod router;
mod state;

pub use error::{ApiError, ErrorResponse};
pub use router::build_router;
pub use state::AppState;

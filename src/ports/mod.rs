//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Subscription Ports
//!
//! - `SubscriptionReader` - active subscription and tier catalog lookups
//!
//! ## Referral Ports
//!
//! - `ReferralRepository` - referral table, issued code, contest standing
//! - `ReferralCodeGenerator` - backend procedure issuing fresh codes
//! - `ReferralPortsProvider` - binds both to a user session
//!
//! ## Platform Ports
//!
//! - `SessionValidator` - bearer token validation
//! - `RouteLoader` - route bundle prefetching

mod referral_code_generator;
mod referral_ports;
mod referral_repository;
mod route_loader;
mod session_validator;
mod subscription_reader;

pub use referral_code_generator::ReferralCodeGenerator;
pub use referral_ports::{ReferralPorts, ReferralPortsProvider};
pub use referral_repository::ReferralRepository;
pub use route_loader::{RouteLoadError, RouteLoader};
pub use session_validator::SessionValidator;
pub use subscription_reader::SubscriptionReader;

//! Configuration error types

use thiserror::Error;

use crate::domain::access::PermissionTableError;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Invalid permission table: {0}")]
    PermissionTable(#[from] PermissionTableError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid host address: {0}")]
    InvalidHost(String),

    #[error("Backend URL must start with http:// or https://")]
    InvalidBackendUrl,

    #[error("Backend URL must use HTTPS in production")]
    BackendMustBeHttps,

    #[error("Site origin must be an absolute http(s) URL without a path")]
    InvalidSiteOrigin,

    #[error("JWT secret must be at least {0} bytes in production")]
    WeakJwtSecret(usize),

    #[error("Route path must start with '/': {0}")]
    InvalidRoutePath(String),

    #[error("Route path configured twice: {0}")]
    DuplicateRoutePath(String),
}

//! Authentication types for the domain layer.
//!
//! `AuthenticatedUser` is what the session validator produces from a
//! backend-issued access token. It carries the raw token along so calls to
//! the hosted backend can act on the user's behalf.

use super::UserId;
use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

/// Authenticated user extracted from a validated access token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// The unique user identifier from the auth service (`sub` claim).
    pub id: UserId,

    /// User's email address, when present in the token.
    pub email: Option<String>,

    /// The access token the user presented.
    access_token: Secret<String>,
}

impl AuthenticatedUser {
    pub fn new(id: UserId, email: Option<String>, access_token: impl Into<String>) -> Self {
        Self {
            id,
            email,
            access_token: Secret::new(access_token.into()),
        }
    }

    /// The raw access token, for forwarding to the hosted backend.
    pub fn access_token(&self) -> &str {
        self.access_token.expose_secret()
    }
}

/// Authentication errors that can occur during token validation.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token has expired.
    #[error("Token expired")]
    TokenExpired,

    /// The token carries no usable subject.
    #[error("Token has no subject")]
    MissingSubject,
}

impl AuthError {
    /// Returns true if this error indicates the user should sign in again.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, AuthError::InvalidToken | AuthError::TokenExpired)
    }
}

//! Turns a bearer token from the hosted auth service into a user.
//!
//! Bad signatures and malformed tokens are `InvalidToken`, expired ones
//! `TokenExpired`, and a token without a usable subject `MissingSubject`.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// `token` is the raw value without the `Bearer ` prefix.
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usable_as_shared_trait_object() {
        fn assert_shareable<T: Send + Sync + ?Sized>() {}
        assert_shareable::<dyn SessionValidator>();
    }
}

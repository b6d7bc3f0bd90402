//! Fixed-token `SessionValidator` used by tests and local demos.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Unknown tokens are `InvalidToken`.
#[derive(Debug, Default)]
pub struct MockSessionValidator {
    tokens: RwLock<HashMap<String, AuthenticatedUser>>,
    forced: RwLock<Option<AuthError>>,
}

impl MockSessionValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valid token that maps to a user.
    pub fn with_user(self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.add_token(token, user);
        self
    }

    /// Registers `token` for a user whose access token is the token itself.
    /// Panics on an empty `user_id`.
    pub fn with_test_user(self, token: impl Into<String>, user_id: impl Into<String>) -> Self {
        let token = token.into();
        let user_id = user_id.into();
        let user = AuthenticatedUser::new(
            UserId::new(user_id.clone()).expect("test user id must not be empty"),
            Some(format!("{}@test.campus.example", user_id)),
            token.clone(),
        );
        self.with_user(token, user)
    }

    /// Every later validation fails with `error`.
    pub fn with_error(self, error: AuthError) -> Self {
        *self
            .forced
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(error);
        self
    }

    /// Registers a new valid token at runtime.
    pub fn add_token(&self, token: impl Into<String>, user: AuthenticatedUser) {
        self.tokens
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token.into(), user);
    }

    /// Removes a token, making it invalid.
    pub fn remove_token(&self, token: &str) {
        self.tokens
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(token);
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        if let Some(error) = self
            .forced
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
        {
            return Err(error);
        }

        self.tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn known_token_resolves_user() {
        let validator = MockSessionValidator::new().with_test_user("tok", "user-9");
        let user = validator.validate("tok").await.unwrap();
        assert_eq!(user.id.as_str(), "user-9");
        assert_eq!(user.access_token(), "tok");
    }

    #[tokio::test]
    async fn removed_token_is_rejected() {
        let validator = MockSessionValidator::new().with_test_user("tok", "user-9");
        validator.remove_token("tok");
        assert!(matches!(
            validator.validate("tok").await,
            Err(AuthError::InvalidToken)
        ));
    }

    #[tokio::test]
    async fn forced_error_wins() {
        let validator = MockSessionValidator::new()
            .with_test_user("tok", "user-9")
            .with_error(AuthError::TokenExpired);
        assert!(matches!(
            validator.validate("tok").await,
            Err(AuthError::TokenExpired)
        ));
    }
}

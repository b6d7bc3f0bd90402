//! HS256 JWT adapter for backend-issued access tokens.
//!
//! The hosted backend signs its access tokens with a shared project secret.
//! This adapter implements the `SessionValidator` port by:
//!
//! 1. Verifying the HS256 signature against that secret
//! 2. Checking `exp` (with configurable leeway), `aud` and optionally `iss`
//! 3. Mapping `sub` and `email` onto a domain `AuthenticatedUser`
//!
//! The validated token is kept on the user so backend calls can be made on
//! their behalf.

use async_trait::async_trait;
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Claims carried by backend access tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject - the user ID
    #[serde(default)]
    pub sub: String,

    /// Expiry timestamp (Unix epoch seconds)
    pub exp: i64,

    /// Audience, usually `authenticated`
    #[serde(default)]
    pub aud: Option<String>,

    #[serde(default)]
    pub iss: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    /// Backend role (`authenticated`, `anon`, ...)
    #[serde(default)]
    pub role: Option<String>,
}

/// Validates HS256 access tokens with the backend's shared secret.
pub struct JwtSessionValidator {
    secret: Secret<String>,
    validation: Validation,
}

impl JwtSessionValidator {
    pub fn new(secret: impl Into<String>, audience: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[audience]);
        validation.set_required_spec_claims(&["exp", "sub", "aud"]);
        Self {
            secret: Secret::new(secret.into()),
            validation,
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        let mut validator = Self::new(config.jwt_secret.clone(), &config.audience)
            .with_leeway(config.leeway_secs);
        if let Some(issuer) = &config.issuer {
            validator = validator.with_issuer(issuer);
        }
        validator
    }

    pub fn with_issuer(mut self, issuer: &str) -> Self {
        self.validation.set_issuer(&[issuer]);
        self
    }

    pub fn with_leeway(mut self, secs: u64) -> Self {
        self.validation.leeway = secs;
        self
    }

    fn decode_claims(&self, token: &str) -> Result<AccessClaims, AuthError> {
        // Without a secret every token is refused.
        if self.secret.expose_secret().is_empty() {
            return Err(AuthError::InvalidToken);
        }
        let key = DecodingKey::from_secret(self.secret.expose_secret().as_bytes());
        decode::<AccessClaims>(token, &key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token expired");
                    AuthError::TokenExpired
                }
                ErrorKind::InvalidAudience => {
                    tracing::warn!("Invalid audience in token");
                    AuthError::InvalidToken
                }
                ErrorKind::InvalidIssuer => {
                    tracing::warn!("Invalid issuer in token");
                    AuthError::InvalidToken
                }
                _ => {
                    tracing::debug!("Token validation failed: {}", e);
                    AuthError::InvalidToken
                }
            })
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let claims = self.decode_claims(token)?;

        let user_id = UserId::new(claims.sub).map_err(|_| {
            tracing::warn!("Token has an empty subject");
            AuthError::MissingSubject
        })?;

        Ok(AuthenticatedUser::new(user_id, claims.email, token))
    }
}

impl std::fmt::Debug for JwtSessionValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSessionValidator")
            .field("audience", &self.validation.aud)
            .field("issuer", &self.validation.iss)
            .finish_non_exhaustive()
    }
}

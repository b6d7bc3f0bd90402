//! Email address of an invited person.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// A lightly validated email address, lowercased.
///
/// Deliverability is the backend's problem; this only stops obvious typos
/// before a network call is made.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReferredEmail(String);

impl ReferredEmail {
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into().trim().to_lowercase();
        if email.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        let mut parts = email.split('@');
        let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
            (Some(local), Some(domain), None) => (local, domain),
            _ => {
                return Err(ValidationError::invalid_format(
                    "email",
                    "must contain exactly one '@'",
                ))
            }
        };
        if local.is_empty() || domain.is_empty() {
            return Err(ValidationError::invalid_format(
                "email",
                "local part and domain must be present",
            ));
        }
        if email.chars().any(char::is_whitespace) {
            return Err(ValidationError::invalid_format("email", "must not contain spaces"));
        }
        Ok(Self(email))
    }

    /// Wraps an address the backend already stored, as-is.
    ///
    /// Rows may predate the input rules or come from imports, so they are
    /// neither re-validated nor re-normalized.
    pub fn from_stored(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ReferredEmail {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ReferredEmail> for String {
    fn from(email: ReferredEmail) -> Self {
        email.0
    }
}

impl fmt::Display for ReferredEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_whitespace() {
        let email = ReferredEmail::new("  Friend@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "friend@example.com");
    }

    #[test]
    fn rejects_missing_at() {
        assert!(ReferredEmail::new("friend.example.com").is_err());
    }

    #[test]
    fn rejects_two_ats() {
        assert!(ReferredEmail::new("a@b@c.com").is_err());
    }

    #[test]
    fn rejects_empty_parts() {
        assert!(ReferredEmail::new("@example.com").is_err());
        assert!(ReferredEmail::new("friend@").is_err());
        assert!(ReferredEmail::new("").is_err());
    }

    #[test]
    fn stored_address_is_kept_verbatim() {
        let email = ReferredEmail::from_stored("Legacy Import");
        assert_eq!(email.as_str(), "Legacy Import");
    }

    #[test]
    fn rejects_inner_spaces() {
        assert!(ReferredEmail::new("my friend@example.com").is_err());
    }
}

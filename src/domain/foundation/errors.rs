//! Domain error types.

use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Raised when a value object rejects its input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    EmptyField { field: String },

    #[error("{field} is malformed: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    pub fn empty_field(field: impl Into<String>) -> Self {
        Self::EmptyField {
            field: field.into(),
        }
    }

    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn field(&self) -> &str {
        match self {
            Self::EmptyField { field } | Self::InvalidFormat { field, .. } => field,
        }
    }
}

/// Machine-readable error category, rendered in SCREAMING_SNAKE_CASE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ValidationFailed,
    InvalidStateTransition,
    MissingPrecondition,
    SubscriptionNotFound,
    ReferralNotFound,
    Unauthorized,
    Forbidden,
    /// The hosted backend rejected a call or could not be reached.
    BackendError,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ValidationFailed => "VALIDATION_FAILED",
            Self::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            Self::MissingPrecondition => "MISSING_PRECONDITION",
            Self::SubscriptionNotFound => "SUBSCRIPTION_NOT_FOUND",
            Self::ReferralNotFound => "REFERRAL_NOT_FOUND",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::BackendError => "BACKEND_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by ports and services.
///
/// For remote failures `message` is whatever the backend reported.
#[derive(Debug, Clone, Error)]
#[error("[{code}] {message}")]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    pub fn backend(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BackendError, message)
    }

    /// Validation failure tagged with the offending field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message).with_detail("field", field)
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let field = err.field().to_string();
        DomainError::validation(field, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_name_the_field() {
        assert_eq!(
            ValidationError::empty_field("email").to_string(),
            "email must not be empty"
        );
        assert_eq!(
            ValidationError::invalid_format("email", "no @").to_string(),
            "email is malformed: no @"
        );
    }

    #[test]
    fn domain_error_display_prefixes_code() {
        let err = DomainError::backend("relation does not exist");
        assert_eq!(err.to_string(), "[BACKEND_ERROR] relation does not exist");
    }

    #[test]
    fn validation_converts_with_field_detail() {
        let err: DomainError = ValidationError::empty_field("referral_code").into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details["field"], "referral_code");
    }

    #[test]
    fn codes_render_screaming_snake_case() {
        assert_eq!(ErrorCode::MissingPrecondition.to_string(), "MISSING_PRECONDITION");
        assert_eq!(ErrorCode::InternalError.as_str(), "INTERNAL_ERROR");
    }
}

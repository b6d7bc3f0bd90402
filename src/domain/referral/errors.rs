//! Referral-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotAuthenticated | 401 |
//! | MissingReferralCode | 412 |
//! | InvalidEmail | 400 |
//! | Backend | 502 |

use serde::Serialize;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors raised by the referral ledger.
///
/// The first two are local precondition failures: they are returned before
/// any call to the backend is made.
#[derive(Debug, Clone, Error)]
pub enum ReferralError {
    #[error("You need to be signed in to invite friends")]
    NotAuthenticated,

    #[error("Generate your referral code before sending invites")]
    MissingReferralCode,

    #[error("{0}")]
    InvalidEmail(ValidationError),

    #[error("{0}")]
    Backend(String),
}

impl ReferralError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ReferralError::NotAuthenticated => ErrorCode::Unauthorized,
            ReferralError::MissingReferralCode => ErrorCode::MissingPrecondition,
            ReferralError::InvalidEmail(_) => ErrorCode::ValidationFailed,
            ReferralError::Backend(_) => ErrorCode::BackendError,
        }
    }

    /// True for failures detected locally, without a network call.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            ReferralError::NotAuthenticated | ReferralError::MissingReferralCode
        )
    }

    /// The `{error, code}` body handed back to callers.
    pub fn to_body(&self) -> ReferralErrorBody {
        ReferralErrorBody {
            error: self.to_string(),
            code: self.code().to_string(),
        }
    }
}

impl From<DomainError> for ReferralError {
    fn from(err: DomainError) -> Self {
        ReferralError::Backend(err.message)
    }
}

/// Structured error result for callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferralErrorBody {
    pub error: String,
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preconditions_are_flagged() {
        assert!(ReferralError::NotAuthenticated.is_precondition());
        assert!(ReferralError::MissingReferralCode.is_precondition());
        assert!(!ReferralError::Backend("boom".into()).is_precondition());
    }

    #[test]
    fn body_carries_message_and_code() {
        let body = ReferralError::MissingReferralCode.to_body();
        assert_eq!(body.code, "MISSING_PRECONDITION");
        assert!(body.error.contains("referral code"));
    }

    #[test]
    fn backend_error_keeps_backend_message() {
        let err: ReferralError = DomainError::backend("duplicate key value").into();
        assert_eq!(err.to_string(), "duplicate key value");
        assert_eq!(err.code(), ErrorCode::BackendError);
    }
}

//! Shareable referral links.

/// Composes `<origin>/auth?ref=<code>` links for a fixed site origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferralLinkBuilder {
    origin: String,
}

impl ReferralLinkBuilder {
    /// Trailing slashes on the origin are dropped.
    pub fn new(origin: impl Into<String>) -> Self {
        let origin = origin.into();
        Self {
            origin: origin.trim_end_matches('/').to_string(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// The link for `code`, or an empty string when no code has been issued.
    pub fn derive(&self, code: &str) -> String {
        if code.is_empty() {
            return String::new();
        }
        format!("{}/auth?ref={}", self.origin, code)
    }
}

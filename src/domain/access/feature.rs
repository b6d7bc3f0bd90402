//! Feature identifiers gating UI capabilities.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Feature identifiers referenced by the UI and the default permission table.
pub mod features {
    pub const COURSES: &str = "courses";
    pub const PREMIUM_COURSES: &str = "premium_courses";
    pub const AI_TOOLS: &str = "ai_tools";
    pub const REFERRALS: &str = "referrals";
    pub const MARKETPLACE_BROWSE: &str = "marketplace_browse";
    pub const MARKETPLACE: &str = "marketplace";
    pub const ANALYTICS: &str = "analytics";
    pub const CAREER_COACHING: &str = "career_coaching";
    pub const RESUME_REVIEW: &str = "resume_review";
    pub const PRIORITY_SUPPORT: &str = "priority_support";
}

/// A validated feature identifier: lowercase ASCII, digits and underscores.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FeatureId(String);

impl FeatureId {
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::empty_field("feature"));
        }
        if !id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        {
            return Err(ValidationError::invalid_format(
                "feature",
                format!("'{}' must be lowercase snake_case", id),
            ));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for FeatureId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FeatureId> for String {
    fn from(id: FeatureId) -> Self {
        id.0
    }
}

impl Borrow<str> for FeatureId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_snake_case() {
        assert_eq!(FeatureId::new("career_coaching").unwrap().as_str(), "career_coaching");
    }

    #[test]
    fn rejects_empty_and_mixed_case() {
        assert!(FeatureId::new("").is_err());
        assert!(FeatureId::new("Marketplace").is_err());
        assert!(FeatureId::new("ai-tools").is_err());
    }

    #[test]
    fn deserialization_validates() {
        assert!(serde_json::from_str::<FeatureId>("\"analytics\"").is_ok());
        assert!(serde_json::from_str::<FeatureId>("\"Bad Feature\"").is_err());
    }
}

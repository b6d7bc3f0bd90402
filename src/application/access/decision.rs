//! Outcome of a per-user feature check.

use serde::{Deserialize, Serialize};

use crate::domain::subscription::TierName;

/// Result of an access check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// Access is granted.
    Allowed,
    /// Access is denied with a specific reason.
    Denied(DenialReason),
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allowed)
    }

    /// The denial reason, if any.
    pub fn reason(&self) -> Option<&DenialReason> {
        match self {
            AccessDecision::Allowed => None,
            AccessDecision::Denied(reason) => Some(reason),
        }
    }

    /// Converts the decision to a Result type, with denied becoming an error.
    pub fn into_result(self) -> Result<(), DenialReason> {
        match self {
            AccessDecision::Allowed => Ok(()),
            AccessDecision::Denied(reason) => Err(reason),
        }
    }
}

/// Reason why access was denied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DenialReason {
    /// Signed out, or signed in without an active subscription.
    NoSubscription,

    /// The tier in effect does not grant the feature.
    ///
    /// Also covers tier identifiers missing from the permission table.
    FeatureNotIncluded {
        feature: String,
        tier: String,
        /// Least tier that would grant it, if any does.
        required_tier: Option<TierName>,
    },

    /// The subscription could not be loaded; access fails closed.
    SubscriptionUnavailable,
}

impl DenialReason {
    /// Get a user-facing message for the denial reason.
    pub fn user_message(&self) -> String {
        match self {
            DenialReason::NoSubscription => {
                "Choose a plan to unlock this feature.".to_string()
            }
            DenialReason::FeatureNotIncluded {
                feature,
                required_tier: Some(required),
                ..
            } => format!(
                "{} is available on the {} plan and above.",
                feature,
                required.display_name()
            ),
            DenialReason::FeatureNotIncluded { feature, .. } => {
                format!("{} is not available on your plan.", feature)
            }
            DenialReason::SubscriptionUnavailable => {
                "We couldn't load your plan right now. Please try again.".to_string()
            }
        }
    }
}

impl std::fmt::Display for DenialReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_has_no_reason() {
        let decision = AccessDecision::Allowed;
        assert!(decision.is_allowed());
        assert_eq!(decision.reason(), None);
        assert!(decision.into_result().is_ok());
    }

    #[test]
    fn denied_into_result_is_err() {
        let decision = AccessDecision::Denied(DenialReason::NoSubscription);
        assert!(!decision.is_allowed());
        assert_eq!(decision.into_result(), Err(DenialReason::NoSubscription));
    }

    #[test]
    fn upgrade_message_names_required_tier() {
        let reason = DenialReason::FeatureNotIncluded {
            feature: "analytics".to_string(),
            tier: "starter".to_string(),
            required_tier: Some(TierName::Creator),
        };
        let msg = reason.user_message();
        assert!(msg.contains("analytics"));
        assert!(msg.contains("Creator"));
    }

    #[test]
    fn ungrantable_feature_message() {
        let reason = DenialReason::FeatureNotIncluded {
            feature: "teleport".to_string(),
            tier: "career".to_string(),
            required_tier: None,
        };
        assert!(reason.user_message().contains("not available"));
    }

    #[test]
    fn reason_serializes_with_type_tag() {
        let reason = DenialReason::FeatureNotIncluded {
            feature: "marketplace".to_string(),
            tier: "starter".to_string(),
            required_tier: Some(TierName::Creator),
        };
        let json = serde_json::to_string(&reason).unwrap();
        assert!(json.contains("\"type\":\"feature_not_included\""));
        assert!(json.contains("\"required_tier\":\"creator\""));
    }
}

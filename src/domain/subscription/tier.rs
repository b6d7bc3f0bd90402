//! Subscription tier identifiers.
//!
//! The platform sells three tiers. Tier identifiers still travel as plain
//! strings through the backend and the resolver, so an unrecognised value
//! is representable; `TierName` is the closed set we know about.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Subscription tier level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TierName {
    /// Entry tier: courses and the AI-tools directory, one marketplace listing.
    Starter,

    /// Creator tier: adds selling on the marketplace and analytics.
    Creator,

    /// Career tier: everything, unlimited listings.
    Career,
}

impl TierName {
    /// Every tier, least to most permissive.
    pub const ALL: [TierName; 3] = [TierName::Starter, TierName::Creator, TierName::Career];

    /// Returns the identifier used in the backend and the permission table.
    pub fn as_str(&self) -> &'static str {
        match self {
            TierName::Starter => "starter",
            TierName::Creator => "creator",
            TierName::Career => "career",
        }
    }

    /// Returns the display name for this tier.
    pub fn display_name(&self) -> &'static str {
        match self {
            TierName::Starter => "Starter",
            TierName::Creator => "Creator",
            TierName::Career => "Career",
        }
    }

    /// Returns the numeric rank of this tier for comparison.
    ///
    /// Higher rank = more features.
    pub fn rank(&self) -> u8 {
        match self {
            TierName::Starter => 0,
            TierName::Creator => 1,
            TierName::Career => 2,
        }
    }

    /// Whether marketplace listings are uncapped on this tier.
    ///
    /// The listing-quota banner is suppressed entirely for these tiers.
    pub fn has_unlimited_listings(&self) -> bool {
        matches!(self, TierName::Career)
    }
}

impl std::fmt::Display for TierName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a string is not one of the known tiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown subscription tier '{0}'")]
pub struct UnknownTier(pub String);

impl FromStr for TierName {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "starter" => Ok(TierName::Starter),
            "creator" => Ok(TierName::Creator),
            "career" => Ok(TierName::Career),
            other => Err(UnknownTier(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_increase_with_permissiveness() {
        assert!(TierName::Starter.rank() < TierName::Creator.rank());
        assert!(TierName::Creator.rank() < TierName::Career.rank());
    }

    #[test]
    fn all_is_ordered_by_rank() {
        let ranks: Vec<u8> = TierName::ALL.iter().map(TierName::rank).collect();
        assert_eq!(ranks, vec![0, 1, 2]);
    }

    #[test]
    fn parses_backend_identifiers() {
        assert_eq!("creator".parse::<TierName>(), Ok(TierName::Creator));
    }

    #[test]
    fn parsing_is_case_sensitive() {
        // Identifiers in the backend are lowercase; anything else is a typo.
        assert!("Career".parse::<TierName>().is_err());
    }

    #[test]
    fn only_career_has_unlimited_listings() {
        assert!(!TierName::Starter.has_unlimited_listings());
        assert!(!TierName::Creator.has_unlimited_listings());
        assert!(TierName::Career.has_unlimited_listings());
    }

    #[test]
    fn tier_serializes_lowercase() {
        let json = serde_json::to_string(&TierName::Career).unwrap();
        assert_eq!(json, "\"career\"");
    }
}

//! Tier-to-feature permission table.
//!
//! The table is data, not code: it is parsed from YAML once at startup
//! (the embedded default or a file named in configuration) and validated
//! before anything can query it. After that it is read-only.
//!
//! # Invariants
//!
//! - Every known tier has exactly one entry, possibly with no features.
//! - Entries are ordered least to most permissive, and each entry's
//!   feature set contains the previous entry's set.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

use super::FeatureId;
use crate::domain::subscription::TierName;

const DEFAULT_PERMISSIONS: &str = include_str!("default_permissions.yaml");

static EMPTY: Lazy<BTreeSet<FeatureId>> = Lazy::new(BTreeSet::new);

/// Errors raised while loading or validating a permission table.
#[derive(Debug, Error)]
pub enum PermissionTableError {
    #[error("failed to read permission table: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse permission table: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("permission table has no tiers")]
    Empty,

    #[error("permission table names unknown tier '{0}'")]
    UnknownTier(String),

    #[error("tier '{0}' appears more than once")]
    DuplicateTier(String),

    #[error("tier '{0}' has no entry")]
    MissingTier(String),

    #[error("tier '{tier}' is listed out of order")]
    OutOfOrder { tier: String },

    #[error("tier '{higher}' is missing features granted to '{lower}': {missing:?}")]
    NotSuperset {
        lower: String,
        higher: String,
        missing: Vec<String>,
    },
}

#[derive(Debug, Deserialize)]
struct RawTable {
    tiers: Vec<RawEntry>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    tier: String,
    #[serde(default)]
    features: BTreeSet<FeatureId>,
}

/// One tier's permission set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierPermissions {
    pub tier: TierName,
    pub features: BTreeSet<FeatureId>,
}

/// Validated mapping from tier identifier to granted features.
#[derive(Debug, Clone)]
pub struct FeaturePermissionTable {
    entries: Vec<TierPermissions>,
    index: HashMap<&'static str, usize>,
}

impl FeaturePermissionTable {
    /// Builds a table from entries ordered least to most permissive.
    pub fn new(entries: Vec<TierPermissions>) -> Result<Self, PermissionTableError> {
        if entries.is_empty() {
            return Err(PermissionTableError::Empty);
        }

        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if index.insert(entry.tier.as_str(), position).is_some() {
                return Err(PermissionTableError::DuplicateTier(entry.tier.to_string()));
            }
        }
        if let Some(missing) = TierName::ALL.iter().find(|t| !index.contains_key(t.as_str())) {
            return Err(PermissionTableError::MissingTier(missing.to_string()));
        }

        for pair in entries.windows(2) {
            let (lower, higher) = (&pair[0], &pair[1]);
            if higher.tier.rank() <= lower.tier.rank() {
                return Err(PermissionTableError::OutOfOrder {
                    tier: higher.tier.to_string(),
                });
            }
            let missing: Vec<String> = lower
                .features
                .difference(&higher.features)
                .map(|f| f.to_string())
                .collect();
            if !missing.is_empty() {
                return Err(PermissionTableError::NotSuperset {
                    lower: lower.tier.to_string(),
                    higher: higher.tier.to_string(),
                    missing,
                });
            }
        }

        Ok(Self { entries, index })
    }

    /// Parses and validates a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, PermissionTableError> {
        let raw: RawTable = serde_yaml::from_str(yaml)?;
        let entries = raw
            .tiers
            .into_iter()
            .map(|entry| {
                let tier = entry
                    .tier
                    .parse::<TierName>()
                    .map_err(|e| PermissionTableError::UnknownTier(e.0))?;
                Ok(TierPermissions {
                    tier,
                    features: entry.features,
                })
            })
            .collect::<Result<Vec<_>, PermissionTableError>>()?;
        Self::new(entries)
    }

    /// Reads, parses and validates a YAML file.
    pub fn from_path(path: &Path) -> Result<Self, PermissionTableError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// The table shipped with the crate.
    pub fn builtin() -> Result<Self, PermissionTableError> {
        Self::from_yaml_str(DEFAULT_PERMISSIONS)
    }

    /// The permission set for a tier identifier.
    ///
    /// Identifiers without an entry get the empty set.
    pub fn features_for(&self, tier: &str) -> &BTreeSet<FeatureId> {
        self.index
            .get(tier)
            .map(|&i| &self.entries[i].features)
            .unwrap_or(&EMPTY)
    }

    /// The empty set handed out for absent or unknown tiers.
    pub fn no_features(&self) -> &BTreeSet<FeatureId> {
        &EMPTY
    }

    pub fn contains_tier(&self, tier: &str) -> bool {
        self.index.contains_key(tier)
    }

    /// Entries, least to most permissive.
    pub fn entries(&self) -> &[TierPermissions] {
        &self.entries
    }
}

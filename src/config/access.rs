//! Feature access configuration

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::access::{FeaturePermissionTable, PermissionTableError};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccessConfig {
    /// YAML permission table; the embedded default is used when unset
    pub permissions_path: Option<PathBuf>,
}

impl AccessConfig {
    /// Loads and validates the permission table.
    pub fn load_permission_table(&self) -> Result<FeaturePermissionTable, PermissionTableError> {
        match &self.permissions_path {
            Some(path) => FeaturePermissionTable::from_path(path),
            None => FeaturePermissionTable::builtin(),
        }
    }
}

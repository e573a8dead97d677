//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::role::Role;

/// Console navigation configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Catalog document to load instead of the built-in catalog
    /// (`UMS_NAV_CATALOG`).
    pub catalog_path: Option<PathBuf>,

    /// Role assumed when a command is given none (`UMS_NAV_ROLE`).
    pub default_role: Option<Role>,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let catalog_path = lookup("UMS_NAV_CATALOG")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let default_role = lookup("UMS_NAV_ROLE")
            .filter(|v| !v.trim().is_empty())
            .map(|v| v.parse::<Role>())
            .transpose()
            .context("UMS_NAV_ROLE must be a known role")?;

        Ok(Self {
            catalog_path,
            default_role,
        })
    }
}

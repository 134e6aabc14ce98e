//! Deployment profile selection.
//!
//! A [`Profile`] names the deployment target whose record is built. The name
//! doubles as the figment profile used to pick a table out of a config file.

use crate::core::error::DomainError;
use std::fmt;

/// Deployment target for an environment record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Profile {
    /// Local development build (default)
    #[default]
    Development,
    /// Production build
    Production,
}

impl Profile {
    /// All known profiles, in display order
    pub const ALL: [Profile; 2] = [Profile::Development, Profile::Production];

    /// Canonical lowercase name, also used as the config table name
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Development => "development",
            Profile::Production => "production",
        }
    }

    /// Whether this profile produces a record with `production = true`
    pub fn is_production(&self) -> bool {
        matches!(self, Profile::Production)
    }

    /// Profile implied by a record's `production` flag
    pub fn from_production_flag(production: bool) -> Self {
        if production {
            Profile::Production
        } else {
            Profile::Development
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Profile {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Profile::Development),
            "production" | "prod" => Ok(Profile::Production),
            _ => Err(DomainError::InvalidProfile(s.to_string())),
        }
    }
}

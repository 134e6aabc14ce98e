//! Process-wide active environment.
//!
//! Application bootstrap installs exactly one record; everything afterwards
//! reads it through [`active`]. The record is never replaced while the
//! process runs.

use super::record::EnvironmentConfig;
use crate::core::error::DomainError;
use std::sync::OnceLock;

static ACTIVE: OnceLock<EnvironmentConfig> = OnceLock::new();

/// Install the record for this process.
///
/// Fails with [`DomainError::AlreadyInstalled`] if a record was installed
/// before, leaving the first one in place.
pub fn install(config: EnvironmentConfig) -> Result<&'static EnvironmentConfig, DomainError> {
    ACTIVE
        .set(config)
        .map_err(|_| DomainError::AlreadyInstalled)?;
    ACTIVE.get().ok_or(DomainError::NotInstalled)
}

/// The installed record
pub fn active() -> Result<&'static EnvironmentConfig, DomainError> {
    ACTIVE.get().ok_or(DomainError::NotInstalled)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: the cell is process-global and tests share the process.
    #[test]
    fn test_install_once() {
        assert_eq!(active(), Err(DomainError::NotInstalled));

        let installed = install(EnvironmentConfig::production()).unwrap();
        assert!(installed.production_mode());
        assert_eq!(active().unwrap(), installed);

        let second = install(EnvironmentConfig::development());
        assert_eq!(second, Err(DomainError::AlreadyInstalled));
        assert!(active().unwrap().production_mode());
    }
}

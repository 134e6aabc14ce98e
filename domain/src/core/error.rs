//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid profile: {0} (expected 'development' or 'production')")]
    InvalidProfile(String),

    #[error("Invalid URL for {field}: {reason}")]
    InvalidUrl { field: String, reason: String },

    #[error("An environment is already installed for this process")]
    AlreadyInstalled,

    #[error("No environment has been installed for this process")]
    NotInstalled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_profile_display() {
        let error = DomainError::InvalidProfile("staging".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid profile: staging (expected 'development' or 'production')"
        );
    }
}

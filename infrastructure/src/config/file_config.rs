//! Raw configuration data types
//!
//! These structs represent one profile table of a `brewenv.toml` file (or the
//! merged result of all sources). Every field is optional so that an absent
//! key is reported by name instead of aborting deserialization; `production`
//! stays an `Option<bool>`, so a non-boolean value is still a parse error.
//! Unknown keys are rejected so a misspelled key cannot fall back to the
//! built-in value unnoticed.

use super::error::{ConfigError, Result};
use brewenv_domain::environment::validation::field;
use brewenv_domain::{Auth0Config, ConfigIssue, EnvironmentConfig, Profile, has_errors};
use serde::{Deserialize, Serialize};

/// Raw identity-provider settings (`[<profile>.auth0]` table)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct FileAuth0Config {
    /// Identity-provider domain or tenant prefix
    pub url: Option<String>,
    /// Token audience identifier
    pub audience: Option<String>,
    /// Public client identifier
    pub client_id: Option<String>,
    /// Redirect URL after authentication
    #[serde(rename = "callbackURL")]
    pub callback_url: Option<String>,
}

/// Raw environment record (one profile table)
///
/// # Example
///
/// ```toml
/// [development]
/// production = false
/// apiServerUrl = "http://127.0.0.1:5000"
///
/// [development.auth0]
/// url = "amack.us"
/// audience = "CoffeeShop"
/// clientId = "zC2eLAAz1QXKGVTqOOT81txy7pKBqGBc"
/// callbackURL = "http://localhost:4200"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct FileEnvironmentConfig {
    /// Build/runtime mode flag
    pub production: Option<bool>,
    /// Base URL of the backend API
    pub api_server_url: Option<String>,
    /// Identity-provider settings
    pub auth0: FileAuth0Config,
}

impl FileEnvironmentConfig {
    /// Raw form of a complete record, used as the lowest-priority layer
    pub fn from_record(record: &EnvironmentConfig) -> Self {
        let auth0 = record.auth0();
        Self {
            production: Some(record.production_mode()),
            api_server_url: Some(record.api_server_url().to_string()),
            auth0: FileAuth0Config {
                url: Some(auth0.url().to_string()),
                audience: Some(auth0.audience().to_string()),
                client_id: Some(auth0.client_id().to_string()),
                callback_url: Some(auth0.callback_url().to_string()),
            },
        }
    }

    /// Layer `over` on top of `self`; fields set in `over` win
    pub fn overlay(self, over: Self) -> Self {
        Self {
            production: over.production.or(self.production),
            api_server_url: over.api_server_url.or(self.api_server_url),
            auth0: FileAuth0Config {
                url: over.auth0.url.or(self.auth0.url),
                audience: over.auth0.audience.or(self.auth0.audience),
                client_id: over.auth0.client_id.or(self.auth0.client_id),
                callback_url: over.auth0.callback_url.or(self.auth0.callback_url),
            },
        }
    }

    /// Set one field from its dotted name, matched case-insensitively.
    ///
    /// Used for environment variables, whose names carry no casing. String
    /// fields take the value verbatim, so `123456` or `true` stay text;
    /// only `production` is parsed, and it must be `true` or `false`.
    pub fn set_field(&mut self, name: &str, value: String) -> Result<()> {
        let invalid = |reason: &str| ConfigError::InvalidField {
            field: name.to_string(),
            reason: reason.to_string(),
        };
        if name.eq_ignore_ascii_case(field::PRODUCTION) {
            let flag = match value.trim().to_ascii_lowercase().as_str() {
                "true" => true,
                "false" => false,
                _ => return Err(invalid("expected `true` or `false`")),
            };
            self.production = Some(flag);
            return Ok(());
        }

        let slot = if name.eq_ignore_ascii_case(field::API_SERVER_URL) {
            &mut self.api_server_url
        } else if name.eq_ignore_ascii_case(field::AUTH0_URL) {
            &mut self.auth0.url
        } else if name.eq_ignore_ascii_case(field::AUTH0_AUDIENCE) {
            &mut self.auth0.audience
        } else if name.eq_ignore_ascii_case(field::AUTH0_CLIENT_ID) {
            &mut self.auth0.client_id
        } else if name.eq_ignore_ascii_case(field::AUTH0_CALLBACK_URL) {
            &mut self.auth0.callback_url
        } else {
            return Err(invalid("unknown key"));
        };
        *slot = Some(value);
        Ok(())
    }

    /// Names of fields that are absent
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            (field::PRODUCTION, self.production.is_some()),
            (field::API_SERVER_URL, self.api_server_url.is_some()),
            (field::AUTH0_URL, self.auth0.url.is_some()),
            (field::AUTH0_AUDIENCE, self.auth0.audience.is_some()),
            (field::AUTH0_CLIENT_ID, self.auth0.client_id.is_some()),
            (field::AUTH0_CALLBACK_URL, self.auth0.callback_url.is_some()),
        ]
        .into_iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| name)
        .collect()
    }

    /// Validate against the selected profile, returning all detected issues.
    ///
    /// Absent fields are reported first. When every field is present the
    /// record-level checks run, plus a warning if `production` contradicts
    /// `profile`.
    pub fn validate(&self, profile: Profile) -> Vec<ConfigIssue> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return missing.into_iter().map(ConfigIssue::missing_field).collect();
        }

        let record = self.to_record_unchecked();
        let mut issues = Vec::new();
        if record.production_mode() != profile.is_production() {
            issues.push(ConfigIssue::profile_mismatch(
                profile,
                record.production_mode(),
            ));
        }
        issues.extend(record.validate());
        issues
    }

    /// Convert into a record, failing if validation reports any error.
    ///
    /// Warnings do not block the conversion.
    pub fn into_record(self, profile: Profile) -> Result<EnvironmentConfig> {
        let issues = self.validate(profile);
        if has_errors(&issues) {
            return Err(ConfigError::Invalid { issues });
        }
        Ok(self.to_record_unchecked())
    }

    fn to_record_unchecked(&self) -> EnvironmentConfig {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        EnvironmentConfig::new(
            self.production.unwrap_or_default(),
            text(&self.api_server_url),
            Auth0Config::new(
                text(&self.auth0.url),
                text(&self.auth0.audience),
                text(&self.auth0.client_id),
                text(&self.auth0.callback_url),
            ),
        )
    }
}

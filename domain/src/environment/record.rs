//! The environment configuration record.
//!
//! An [`EnvironmentConfig`] is a frozen set of deploy-time constants: the API
//! base URL the client talks to and the identity-provider settings it needs
//! to send users through login. Records are built from a [`Profile`]'s
//! built-in values, deserialized, or produced by the infrastructure loader;
//! once built they expose read-only accessors only.
//!
//! The serialized shape keeps the field names the client bundle consumes:
//!
//! ```json
//! {
//!   "production": false,
//!   "apiServerUrl": "http://127.0.0.1:5000",
//!   "auth0": {
//!     "url": "amack.us",
//!     "audience": "CoffeeShop",
//!     "clientId": "zC2eLAAz1QXKGVTqOOT81txy7pKBqGBc",
//!     "callbackURL": "http://localhost:4200"
//!   }
//! }
//! ```

use super::profile::Profile;
use serde::{Deserialize, Serialize};

/// Built-in API server URL for local development
pub const DEFAULT_API_SERVER_URL: &str = "http://127.0.0.1:5000";
/// Built-in Auth0 domain prefix
pub const DEFAULT_AUTH0_URL: &str = "amack.us";
/// Built-in token audience
pub const DEFAULT_AUTH0_AUDIENCE: &str = "CoffeeShop";
/// Built-in public client identifier
pub const DEFAULT_AUTH0_CLIENT_ID: &str = "zC2eLAAz1QXKGVTqOOT81txy7pKBqGBc";
/// Built-in post-login redirect URL
pub const DEFAULT_AUTH0_CALLBACK_URL: &str = "http://localhost:4200";

/// Identity-provider (Auth0) settings of an environment record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Auth0Config {
    url: String,
    audience: String,
    client_id: String,
    #[serde(rename = "callbackURL")]
    callback_url: String,
}

impl Auth0Config {
    pub fn new(
        url: impl Into<String>,
        audience: impl Into<String>,
        client_id: impl Into<String>,
        callback_url: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            audience: audience.into(),
            client_id: client_id.into(),
            callback_url: callback_url.into(),
        }
    }

    /// Identity-provider domain, as configured (may be a tenant prefix)
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Audience the issued tokens are intended for
    pub fn audience(&self) -> &str {
        &self.audience
    }

    /// Public client identifier
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Redirect target after authentication
    pub fn callback_url(&self) -> &str {
        &self.callback_url
    }
}

/// A complete environment configuration record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EnvironmentConfig {
    production: bool,
    api_server_url: String,
    auth0: Auth0Config,
}

impl EnvironmentConfig {
    pub fn new(production: bool, api_server_url: impl Into<String>, auth0: Auth0Config) -> Self {
        Self {
            production,
            api_server_url: api_server_url.into(),
            auth0,
        }
    }

    /// Built-in record for the given profile
    pub fn for_profile(profile: Profile) -> Self {
        Self::new(
            profile.is_production(),
            DEFAULT_API_SERVER_URL,
            Auth0Config::new(
                DEFAULT_AUTH0_URL,
                DEFAULT_AUTH0_AUDIENCE,
                DEFAULT_AUTH0_CLIENT_ID,
                DEFAULT_AUTH0_CALLBACK_URL,
            ),
        )
    }

    /// Built-in development record
    pub fn development() -> Self {
        Self::for_profile(Profile::Development)
    }

    /// Built-in production record.
    ///
    /// Shares the development identity-provider values; deployments override
    /// the URLs through config files or `BREWENV_*` variables.
    pub fn production() -> Self {
        Self::for_profile(Profile::Production)
    }

    pub fn production_mode(&self) -> bool {
        self.production
    }

    /// Profile implied by the `production` flag
    pub fn profile(&self) -> Profile {
        Profile::from_production_flag(self.production)
    }

    /// Base URL of the backend API
    pub fn api_server_url(&self) -> &str {
        &self.api_server_url
    }

    pub fn auth0(&self) -> &Auth0Config {
        &self.auth0
    }
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self::development()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_values() {
        let env = EnvironmentConfig::development();
        assert!(!env.production_mode());
        assert_eq!(env.api_server_url(), "http://127.0.0.1:5000");
        assert_eq!(env.auth0().url(), "amack.us");
        assert_eq!(env.auth0().audience(), "CoffeeShop");
        assert_eq!(env.auth0().client_id(), "zC2eLAAz1QXKGVTqOOT81txy7pKBqGBc");
        assert_eq!(env.auth0().callback_url(), "http://localhost:4200");
    }

    #[test]
    fn test_production_only_flips_flag() {
        let dev = EnvironmentConfig::development();
        let prod = EnvironmentConfig::production();
        assert!(prod.production_mode());
        assert_eq!(prod.profile(), Profile::Production);
        assert_eq!(prod.auth0(), dev.auth0());
        assert_eq!(prod.api_server_url(), dev.api_server_url());
    }

    #[test]
    fn test_default_is_development() {
        assert_eq!(EnvironmentConfig::default(), EnvironmentConfig::development());
    }

    #[test]
    fn test_serialize_uses_client_field_names() {
        let json = serde_json::to_value(EnvironmentConfig::development()).unwrap();
        assert_eq!(json["production"], serde_json::json!(false));
        assert_eq!(json["apiServerUrl"], "http://127.0.0.1:5000");
        assert_eq!(json["auth0"]["url"], "amack.us");
        assert_eq!(json["auth0"]["audience"], "CoffeeShop");
        assert_eq!(json["auth0"]["clientId"], "zC2eLAAz1QXKGVTqOOT81txy7pKBqGBc");
        assert_eq!(json["auth0"]["callbackURL"], "http://localhost:4200");
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        let json = r#"{
            "production": true,
            "apiServerUrl": "https://api.example.com",
            "auth0": {
                "url": "shop",
                "audience": "CoffeeShop",
                "clientId": "abc",
                "callbackURL": "https://app.example.com",
                "secret": "nope"
            }
        }"#;
        assert!(serde_json::from_str::<EnvironmentConfig>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_non_boolean_production() {
        let json = r#"{
            "production": "yes",
            "apiServerUrl": "https://api.example.com",
            "auth0": {
                "url": "shop",
                "audience": "CoffeeShop",
                "clientId": "abc",
                "callbackURL": "https://app.example.com"
            }
        }"#;
        assert!(serde_json::from_str::<EnvironmentConfig>(json).is_err());
    }
}

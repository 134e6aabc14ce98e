//! Endpoints derived from an environment record.
//!
//! The record only stores the Auth0 tenant prefix (`amack.us`); the client
//! and its backend both expand it to the full tenant host and build the
//! issuer, key-set and login URLs from it.

use super::record::{Auth0Config, EnvironmentConfig};
use super::validation::{field, parse_web_url};
use crate::core::error::DomainError;
use url::Url;

/// Host suffix of Auth0-managed tenants
pub const AUTH0_TENANT_SUFFIX: &str = ".auth0.com";

/// Response type requested by the implicit-grant login link
pub const LOGIN_RESPONSE_TYPE: &str = "token";

impl Auth0Config {
    /// Full tenant host, e.g. `amack.us` -> `amack.us.auth0.com`.
    ///
    /// Values already ending in `.auth0.com` are returned unchanged.
    pub fn tenant_domain(&self) -> String {
        let domain = self.url().trim().trim_end_matches('.');
        if domain.to_ascii_lowercase().ends_with(AUTH0_TENANT_SUFFIX) {
            domain.to_string()
        } else {
            format!("{}{}", domain, AUTH0_TENANT_SUFFIX)
        }
    }

    /// Expected `iss` claim of tokens issued by the tenant
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.tenant_domain())
    }

    fn tenant_url(&self, path: &str) -> Result<Url, DomainError> {
        Url::parse(&format!("https://{}/{}", self.tenant_domain(), path)).map_err(|e| {
            DomainError::InvalidUrl {
                field: field::AUTH0_URL.to_string(),
                reason: e.to_string(),
            }
        })
    }

    /// Location of the tenant's public signing keys
    pub fn jwks_url(&self) -> Result<Url, DomainError> {
        self.tenant_url(".well-known/jwks.json")
    }

    /// Login link that sends the user to the tenant and back to the callback
    pub fn authorize_url(&self) -> Result<Url, DomainError> {
        let mut url = self.tenant_url("authorize")?;
        url.query_pairs_mut()
            .append_pair("audience", self.audience())
            .append_pair("response_type", LOGIN_RESPONSE_TYPE)
            .append_pair("client_id", self.client_id())
            .append_pair("redirect_uri", self.callback_url());
        Ok(url)
    }
}

impl EnvironmentConfig {
    /// Join `path` onto the API base URL with exactly one slash between them.
    ///
    /// Any query or fragment on the base URL is dropped; `path` is treated
    /// as plain path segments.
    pub fn api_endpoint(&self, path: &str) -> Result<Url, DomainError> {
        let invalid = |reason: &str| DomainError::InvalidUrl {
            field: field::API_SERVER_URL.to_string(),
            reason: reason.to_string(),
        };

        let mut url = parse_web_url(self.api_server_url())
            .ok_or_else(|| invalid("not an absolute http(s) URL"))?;
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|_| invalid("cannot be a base URL"))?
            .pop_if_empty()
            .extend(path.split('/').filter(|segment| !segment.is_empty()));
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth0(url: &str) -> Auth0Config {
        Auth0Config::new(url, "CoffeeShop", "client-123", "http://localhost:4200")
    }

    #[test]
    fn test_tenant_domain_appends_suffix() {
        assert_eq!(auth0("amack.us").tenant_domain(), "amack.us.auth0.com");
    }

    #[test]
    fn test_tenant_domain_keeps_full_host() {
        assert_eq!(
            auth0("amack.us.auth0.com").tenant_domain(),
            "amack.us.auth0.com"
        );
        assert_eq!(auth0("Shop.Auth0.com").tenant_domain(), "Shop.Auth0.com");
    }

    #[test]
    fn test_issuer() {
        assert_eq!(auth0("amack.us").issuer(), "https://amack.us.auth0.com/");
    }

    #[test]
    fn test_jwks_url() {
        let url = auth0("amack.us").jwks_url().unwrap();
        assert_eq!(
            url.as_str(),
            "https://amack.us.auth0.com/.well-known/jwks.json"
        );
    }

    #[test]
    fn test_authorize_url_query() {
        let env = EnvironmentConfig::development();
        let url = env.auth0().authorize_url().unwrap();
        assert_eq!(url.host_str(), Some("amack.us.auth0.com"));
        assert_eq!(url.path(), "/authorize");

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("audience".to_string(), "CoffeeShop".to_string()),
                ("response_type".to_string(), "token".to_string()),
                (
                    "client_id".to_string(),
                    "zC2eLAAz1QXKGVTqOOT81txy7pKBqGBc".to_string()
                ),
                (
                    "redirect_uri".to_string(),
                    "http://localhost:4200".to_string()
                ),
            ]
        );
        assert!(url.as_str().contains("redirect_uri=http%3A%2F%2Flocalhost%3A4200"));
    }

    #[test]
    fn test_authorize_url_rejects_bad_domain() {
        let err = auth0("bad host").authorize_url().unwrap_err();
        assert!(matches!(err, DomainError::InvalidUrl { .. }));
    }

    #[test]
    fn test_api_endpoint_joins_single_slash() {
        let env = EnvironmentConfig::development();
        assert_eq!(
            env.api_endpoint("/drinks").unwrap().as_str(),
            "http://127.0.0.1:5000/drinks"
        );
        assert_eq!(
            env.api_endpoint("drinks-detail").unwrap().as_str(),
            "http://127.0.0.1:5000/drinks-detail"
        );

        let trailing = EnvironmentConfig::new(
            false,
            "https://api.coffee.example/v1/",
            env.auth0().clone(),
        );
        assert_eq!(
            trailing.api_endpoint("/drinks/7").unwrap().as_str(),
            "https://api.coffee.example/v1/drinks/7"
        );
    }

    #[test]
    fn test_api_endpoint_drops_base_query_and_fragment() {
        let env = EnvironmentConfig::new(false, "http://x.example/api?k=v#menu", auth0("amack.us"));
        assert_eq!(
            env.api_endpoint("/drinks").unwrap().as_str(),
            "http://x.example/api/drinks"
        );
    }

    #[test]
    fn test_api_endpoint_requires_absolute_base() {
        let env = EnvironmentConfig::new(false, "localhost", auth0("amack.us"));
        assert!(env.api_endpoint("drinks").is_err());
    }
}

//! Schema-presence validation for [`EnvironmentConfig`].
//!
//! Every string field must be present and non-empty, URLs must be absolute
//! `http`/`https` URLs and the identity-provider domain must be a bare host.
//! Production records additionally get warnings for plain-HTTP and loopback
//! URLs, which are almost always a leftover from a development file.
//!
//! # Examples
//!
//! ```
//! use brewenv_domain::EnvironmentConfig;
//! use brewenv_domain::environment::validation::has_errors;
//!
//! let issues = EnvironmentConfig::development().validate();
//! assert!(issues.is_empty());
//! assert!(!has_errors(&issues));
//! ```

use super::profile::Profile;
use super::record::EnvironmentConfig;
use url::{Host, Url};

/// Field names as they appear in config files and serialized records.
pub mod field {
    pub const PRODUCTION: &str = "production";
    pub const API_SERVER_URL: &str = "apiServerUrl";
    pub const AUTH0_URL: &str = "auth0.url";
    pub const AUTH0_AUDIENCE: &str = "auth0.audience";
    pub const AUTH0_CLIENT_ID: &str = "auth0.clientId";
    pub const AUTH0_CALLBACK_URL: &str = "auth0.callbackURL";

    /// All six record fields, in declaration order
    pub const ALL: [&str; 6] = [
        PRODUCTION,
        API_SERVER_URL,
        AUTH0_URL,
        AUTH0_AUDIENCE,
        AUTH0_CLIENT_ID,
        AUTH0_CALLBACK_URL,
    ];
}

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the record cannot be used.
    Error,
    /// Non-fatal: the record works but is probably not what was intended.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A field is absent or blank.
    MissingField { field: String },
    /// A URL field is not an absolute http(s) URL.
    MalformedUrl { field: String, value: String },
    /// The identity-provider domain is not a bare host name.
    MalformedDomain { value: String },
    /// A production record points at a plain-HTTP URL.
    InsecureUrl { field: String },
    /// A production record points at a loopback host.
    LoopbackHost { field: String },
    /// The `production` flag disagrees with the selected profile.
    ProfileMismatch { selected: String },
}

/// A detected issue in an environment record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    /// Error for a field that is absent or blank
    pub fn missing_field(field: &str) -> Self {
        Self {
            severity: Severity::Error,
            code: ConfigIssueCode::MissingField {
                field: field.to_string(),
            },
            message: format!("{}: value is missing or empty", field),
        }
    }

    /// Warning for a record whose `production` flag contradicts `selected`
    pub fn profile_mismatch(selected: Profile, production: bool) -> Self {
        Self {
            severity: Severity::Warning,
            code: ConfigIssueCode::ProfileMismatch {
                selected: selected.to_string(),
            },
            message: format!(
                "{}: profile '{}' selected but record has production = {}",
                field::PRODUCTION,
                selected,
                production
            ),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Whether any issue in the list is fatal
pub fn has_errors(issues: &[ConfigIssue]) -> bool {
    issues.iter().any(ConfigIssue::is_error)
}

impl EnvironmentConfig {
    /// Validate the record, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        let auth0 = self.auth0();

        for (name, value) in [
            (field::API_SERVER_URL, self.api_server_url()),
            (field::AUTH0_URL, auth0.url()),
            (field::AUTH0_AUDIENCE, auth0.audience()),
            (field::AUTH0_CLIENT_ID, auth0.client_id()),
            (field::AUTH0_CALLBACK_URL, auth0.callback_url()),
        ] {
            if value.trim().is_empty() {
                issues.push(ConfigIssue::missing_field(name));
            }
        }

        if !auth0.url().trim().is_empty() && !is_bare_host(auth0.url()) {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::MalformedDomain {
                    value: auth0.url().to_string(),
                },
                message: format!(
                    "{}: '{}' must be a bare domain without scheme or path",
                    field::AUTH0_URL,
                    auth0.url()
                ),
            });
        }

        for (name, value) in [
            (field::API_SERVER_URL, self.api_server_url()),
            (field::AUTH0_CALLBACK_URL, auth0.callback_url()),
        ] {
            if value.trim().is_empty() {
                continue;
            }
            match parse_web_url(value) {
                Some(url) => {
                    if self.production_mode() {
                        issues.extend(production_warnings(name, &url));
                    }
                }
                None => issues.push(ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::MalformedUrl {
                        field: name.to_string(),
                        value: value.to_string(),
                    },
                    message: format!("{}: '{}' is not an absolute http(s) URL", name, value),
                }),
            }
        }

        issues
    }
}

/// Parse an absolute `http`/`https` URL with a host
pub(crate) fn parse_web_url(value: &str) -> Option<Url> {
    let url = Url::parse(value.trim()).ok()?;
    let web = matches!(url.scheme(), "http" | "https");
    (web && url.host().is_some()).then_some(url)
}

fn is_bare_host(value: &str) -> bool {
    !value.contains("://")
        && !value.contains('/')
        && !value.chars().any(char::is_whitespace)
        && Host::parse(value).is_ok()
}

fn is_loopback(url: &Url) -> bool {
    match url.host() {
        Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
        Some(Host::Ipv4(ip)) => ip.is_loopback(),
        Some(Host::Ipv6(ip)) => ip.is_loopback(),
        None => false,
    }
}

fn production_warnings(name: &str, url: &Url) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();

    if url.scheme() == "http" {
        issues.push(ConfigIssue {
            severity: Severity::Warning,
            code: ConfigIssueCode::InsecureUrl {
                field: name.to_string(),
            },
            message: format!("{}: production record uses plain HTTP", name),
        });
    }

    if is_loopback(url) {
        issues.push(ConfigIssue {
            severity: Severity::Warning,
            code: ConfigIssueCode::LoopbackHost {
                field: name.to_string(),
            },
            message: format!("{}: production record points at a loopback host", name),
        });
    }

    issues
}

//! Console output formatter for environment records

use brewenv_domain::{ConfigIssue, DomainError, EnvironmentConfig, Profile, Severity};
use brewenv_infrastructure::{ConfigSource, SourceKind};
use colored::Colorize;

/// Formats records, issues and sources for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format validation issues with a one-line verdict
    pub fn format_issues(profile: Profile, issues: &[ConfigIssue]) -> String {
        let mut output = String::new();

        for issue in issues {
            let label = match issue.severity {
                Severity::Error => "error:".red().bold(),
                Severity::Warning => "warning:".yellow().bold(),
            };
            output.push_str(&format!("{} {}\n", label, issue.message));
        }

        let errors = issues.iter().filter(|i| i.is_error()).count();
        let warnings = issues.len() - errors;
        let verdict = if errors > 0 {
            format!("{} environment is invalid", profile).red().bold()
        } else {
            format!("{} environment is valid", profile).green().bold()
        };
        output.push_str(&format!(
            "{} ({} error(s), {} warning(s))\n",
            verdict, errors, warnings
        ));

        output
    }

    /// Format configuration sources in priority order
    pub fn format_sources(sources: &[ConfigSource]) -> String {
        let mut output = String::from("Configuration sources (in priority order):\n");

        for source in sources {
            let marker = if source.found {
                "[FOUND]".green().to_string()
            } else {
                "[     ]".dimmed().to_string()
            };
            output.push_str(&format!(
                "  {} {:<8} {}\n",
                marker,
                Self::source_label(source.kind),
                source.location
            ));
        }

        output
    }

    /// Format the login link and the derived identity-provider endpoints
    pub fn format_login(record: &EnvironmentConfig) -> Result<String, DomainError> {
        let auth0 = record.auth0();
        let authorize = auth0.authorize_url()?;
        let jwks = auth0.jwks_url()?;

        Ok(format!(
            "{} {}\n{} {}\n{} {}\n{} {}\n",
            "Login:   ".cyan().bold(),
            authorize,
            "Issuer:  ".cyan().bold(),
            auth0.issuer(),
            "JWKS:    ".cyan().bold(),
            jwks,
            "Audience:".cyan().bold(),
            auth0.audience()
        ))
    }

    fn source_label(kind: SourceKind) -> &'static str {
        match kind {
            SourceKind::Environment => "Env:",
            SourceKind::Explicit => "Config:",
            SourceKind::Project => "Project:",
            SourceKind::Global => "Global:",
            SourceKind::Default => "Default:",
        }
    }
}

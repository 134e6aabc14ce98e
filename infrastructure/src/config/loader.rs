//! Configuration loader with multi-source merging

use super::error::{ConfigError, Result};
use super::file_config::FileEnvironmentConfig;
use brewenv_domain::{EnvironmentConfig, Profile};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Project-level config file names, checked in order
pub const PROJECT_CONFIG_FILES: [&str; 2] = ["brewenv.toml", ".brewenv.toml"];

/// Prefix of environment variables that override file values
pub const DEFAULT_ENV_PREFIX: &str = "BREWENV_";

/// Separator between nested keys in environment variable names
pub const ENV_KEY_SEPARATOR: &str = "__";

/// Where a configuration layer comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// `BREWENV_*` environment variables
    Environment,
    /// `--config <path>`
    Explicit,
    /// `./brewenv.toml` or `./.brewenv.toml`
    Project,
    /// `$XDG_CONFIG_HOME/brewenv/config.toml`
    Global,
    /// Built-in profile values
    Default,
}

/// One configuration layer and whether it contributed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    pub kind: SourceKind,
    /// File location, or a description for non-file sources
    pub location: String,
    pub found: bool,
}

/// Configuration loader that handles file discovery and merging
///
/// Files are organised in profile tables (`[default]`, `[development]`,
/// `[production]`). Within the merged files the selected profile table wins
/// over `[default]`; across files, later layers win for the same table.
/// Environment variables are applied last and beat every file.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    profile: Profile,
    project_dir: PathBuf,
    global_path: Option<PathBuf>,
    env_prefix: Option<String>,
}

impl ConfigLoader {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            project_dir: PathBuf::from("."),
            global_path: Self::global_config_path(),
            env_prefix: Some(DEFAULT_ENV_PREFIX.to_string()),
        }
    }

    /// Search `dir` instead of the working directory for project files
    pub fn with_project_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.project_dir = dir.into();
        self
    }

    /// Use `path` as the global config file (`None` disables it)
    pub fn with_global_path(mut self, path: Option<PathBuf>) -> Self {
        self.global_path = path;
        self
    }

    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    /// Ignore environment variables
    pub fn without_env(mut self) -> Self {
        self.env_prefix = None;
        self
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Load and validate the record for the default loader and `profile`
    ///
    /// Priority (highest to lowest):
    /// 1. `BREWENV_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./brewenv.toml` or `./.brewenv.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/brewenv/config.toml`
    /// 5. Built-in profile values
    pub fn load(profile: Profile, config_path: Option<&Path>) -> Result<EnvironmentConfig> {
        Self::new(profile).load_record(config_path)
    }

    /// Built-in record only (for `--no-config`)
    pub fn load_defaults(profile: Profile) -> EnvironmentConfig {
        EnvironmentConfig::for_profile(profile)
    }

    /// Merge all sources into a raw, unvalidated record
    pub fn resolve(&self, config_path: Option<&Path>) -> Result<FileEnvironmentConfig> {
        let defaults = FileEnvironmentConfig::from_record(&Self::load_defaults(self.profile));
        let mut figment = Figment::new().merge(Serialized::defaults(defaults));

        if let Some(global_path) = self.global_path.as_ref().filter(|p| p.exists()) {
            debug!(path = %global_path.display(), "merging global config");
            figment = figment.merge(Toml::file(global_path).nested());
        }

        if let Some(path) = self.project_config_path() {
            debug!(path = %path.display(), "merging project config");
            figment = figment.merge(Toml::file(&path).nested());
        }

        if let Some(path) = config_path {
            // Toml::file silently skips missing files; an explicit path must exist.
            if !path.exists() {
                return Err(ConfigError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("config file not found: {}", path.display()),
                )));
            }
            debug!(path = %path.display(), "merging explicit config");
            figment = figment.merge(Toml::file(path).nested());
        }

        let raw: FileEnvironmentConfig = figment.select(self.profile.as_str()).extract()?;

        match &self.env_prefix {
            Some(prefix) => Ok(raw.overlay(Self::env_overrides(prefix)?)),
            None => Ok(raw),
        }
    }

    /// Values set through `<prefix>*` variables.
    ///
    /// Read as raw text rather than through figment's value parser, which
    /// would turn `123456` or `true` into numbers and booleans that no
    /// longer fit the string fields. Variable names are matched against the
    /// record's field names case-insensitively.
    fn env_overrides(prefix: &str) -> Result<FileEnvironmentConfig> {
        let mut overrides = FileEnvironmentConfig::default();
        for (key, value) in Env::prefixed(prefix).split(ENV_KEY_SEPARATOR).iter() {
            debug!(key = key.as_str(), "applying environment override");
            overrides
                .set_field(key.as_str(), value)
                .map_err(|error| match error {
                    ConfigError::InvalidField { reason, .. } => ConfigError::InvalidField {
                        field: format!(
                            "{}{}",
                            prefix,
                            key.as_str()
                                .replace('.', ENV_KEY_SEPARATOR)
                                .to_uppercase()
                        ),
                        reason,
                    },
                    other => other,
                })?;
        }
        Ok(overrides)
    }

    /// Merge all sources and convert to a validated record
    pub fn load_record(&self, config_path: Option<&Path>) -> Result<EnvironmentConfig> {
        let record = self.resolve(config_path)?.into_record(self.profile)?;
        info!(
            profile = %self.profile,
            api_server_url = record.api_server_url(),
            "resolved environment"
        );
        Ok(record)
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/brewenv/config.toml if set,
    /// otherwise falls back to ~/.config/brewenv/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("brewenv").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path(&self) -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(|name| self.project_dir.join(name))
            .find(|path| path.exists())
    }

    /// Configuration sources in priority order, highest first
    pub fn sources(&self, config_path: Option<&Path>) -> Vec<ConfigSource> {
        let mut sources = Vec::new();

        if let Some(prefix) = &self.env_prefix {
            let found = std::env::vars().any(|(key, _)| key.starts_with(prefix.as_str()));
            sources.push(ConfigSource {
                kind: SourceKind::Environment,
                location: format!("{}* variables", prefix),
                found,
            });
        }

        if let Some(path) = config_path {
            sources.push(ConfigSource {
                kind: SourceKind::Explicit,
                location: path.display().to_string(),
                found: path.exists(),
            });
        }

        sources.push(match self.project_config_path() {
            Some(path) => ConfigSource {
                kind: SourceKind::Project,
                location: path.display().to_string(),
                found: true,
            },
            None => ConfigSource {
                kind: SourceKind::Project,
                location: format!(
                    "{} or {}",
                    self.project_dir.join(PROJECT_CONFIG_FILES[0]).display(),
                    self.project_dir.join(PROJECT_CONFIG_FILES[1]).display()
                ),
                found: false,
            },
        });

        if let Some(path) = &self.global_path {
            sources.push(ConfigSource {
                kind: SourceKind::Global,
                location: path.display().to_string(),
                found: path.exists(),
            });
        }

        sources.push(ConfigSource {
            kind: SourceKind::Default,
            location: format!("built-in {} values", self.profile),
            found: true,
        });

        sources
    }
}

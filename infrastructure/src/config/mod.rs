//! Configuration loading for brewenv
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `BREWENV_*` environment variables (`BREWENV_AUTH0__CLIENTID`, ...)
//! 2. `--config <path>` specified file
//! 3. Project root: `./brewenv.toml` or `./.brewenv.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/brewenv/config.toml`
//! 5. Built-in profile values

mod error;
mod file_config;
mod loader;

pub use error::{ConfigError, Result};
pub use file_config::{FileAuth0Config, FileEnvironmentConfig};
pub use loader::{
    ConfigLoader, ConfigSource, DEFAULT_ENV_PREFIX, ENV_KEY_SEPARATOR, PROJECT_CONFIG_FILES,
    SourceKind,
};

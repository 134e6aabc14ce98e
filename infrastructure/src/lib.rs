//! Infrastructure layer for brewenv
//!
//! This crate turns files and environment variables into validated
//! environment records, and renders records back out for build tooling.

pub mod config;
pub mod export;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, ConfigSource, FileAuth0Config, FileEnvironmentConfig, SourceKind,
};
pub use export::{ExportFormat, render, template, write_to};

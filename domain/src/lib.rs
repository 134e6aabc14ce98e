//! Domain layer for brewenv
//!
//! This crate contains the environment configuration record, the deployment
//! profiles that select its values, and the validation and derivation rules
//! that operate on it. It has no dependencies on file formats, environment
//! variables or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Environment Configuration Record
//!
//! A flat set of deploy-time constants: `production`, `apiServerUrl` and the
//! `auth0` block (`url`, `audience`, `clientId`, `callbackURL`). Records are
//! immutable once built.
//!
//! ## Profile
//!
//! - **Development** (default): local API server, local callback
//! - **Production**: same shape, `production = true`

pub mod core;
pub mod environment;

// Re-export commonly used types
pub use core::error::DomainError;
pub use environment::{
    profile::Profile,
    record::{Auth0Config, EnvironmentConfig},
    validation::{ConfigIssue, ConfigIssueCode, Severity, has_errors},
};

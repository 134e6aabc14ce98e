//! Environment configuration record and the rules around it.
//!
//! - [`record::EnvironmentConfig`] - the frozen record itself
//! - [`profile::Profile`] - deployment target selecting the built-in values
//! - [`validation`] - schema-presence checks producing [`validation::ConfigIssue`]s
//! - [`endpoints`] - identity-provider and API URLs derived from a record
//! - [`active`] - the process-wide installed record

pub mod active;
pub mod endpoints;
pub mod profile;
pub mod record;
pub mod validation;

pub use active::{active, install};

//! Presentation layer for brewenv
//!
//! This crate contains CLI definitions and console output formatting.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, FormatArg, ProfileArg};
pub use output::console::ConsoleFormatter;

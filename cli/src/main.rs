//! CLI entrypoint for brewenv
//!
//! This is the main binary that wires the loader, exporters and console
//! formatter together.

use anyhow::{Context, Result};
use brewenv_domain::{EnvironmentConfig, Profile, has_errors};
use brewenv_infrastructure::{ConfigLoader, ExportFormat, FileEnvironmentConfig};
use brewenv_presentation::{Cli, Command, ConsoleFormatter};
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let profile = Profile::from(cli.profile);
    info!(%profile, "Starting brewenv");

    let loader = ConfigLoader::new(profile);
    let config_path = cli.config.as_deref();

    match cli.command {
        Command::Show {
            format,
            output,
            force,
        } => {
            let record = resolve(&loader, config_path, cli.no_config)?;
            let format = ExportFormat::from(format);
            let rendered = brewenv_infrastructure::render(&record, format)?;
            match output {
                Some(path) => {
                    brewenv_infrastructure::write_to(&path, &rendered, force)
                        .with_context(|| format!("writing {}", path.display()))?;
                    info!(path = %path.display(), %format, "wrote environment");
                }
                None => print!("{}", rendered),
            }
        }

        Command::Validate => {
            let raw = if cli.no_config {
                FileEnvironmentConfig::from_record(&ConfigLoader::load_defaults(profile))
            } else {
                loader.resolve(config_path)?
            };
            let issues = raw.validate(profile);
            print!("{}", ConsoleFormatter::format_issues(profile, &issues));
            if has_errors(&issues) {
                return Ok(ExitCode::FAILURE);
            }
        }

        Command::Sources => {
            if cli.no_config {
                println!("Configuration loading disabled (--no-config); using built-in values.");
            } else {
                print!("{}", ConsoleFormatter::format_sources(&loader.sources(config_path)));
            }
        }

        Command::LoginUrl => {
            let record = resolve(&loader, config_path, cli.no_config)?;
            print!("{}", ConsoleFormatter::format_login(&record)?);
        }

        Command::Init { path, force } => {
            let contents = brewenv_infrastructure::template(&EnvironmentConfig::development());
            brewenv_infrastructure::write_to(&path, &contents, force)
                .with_context(|| format!("writing {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Resolve the record for `loader`'s profile, honouring `--no-config`
fn resolve(
    loader: &ConfigLoader,
    config_path: Option<&Path>,
    no_config: bool,
) -> Result<EnvironmentConfig> {
    if no_config {
        return Ok(ConfigLoader::load_defaults(loader.profile()));
    }

    let raw = loader.resolve(config_path)?;
    for issue in raw.validate(loader.profile()) {
        if !issue.is_error() {
            warn!("{}", issue.message);
        }
    }
    Ok(raw.into_record(loader.profile())?)
}

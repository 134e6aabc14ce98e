//! CLI command definitions

use brewenv_domain::Profile;
use brewenv_infrastructure::ExportFormat;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Deployment profile as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProfileArg {
    /// Local development build
    #[value(alias = "dev")]
    Development,
    /// Production build
    #[value(alias = "prod")]
    Production,
}

impl From<ProfileArg> for Profile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Development => Profile::Development,
            ProfileArg::Production => Profile::Production,
        }
    }
}

/// Export format for the `show` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// JSON with the client's field names
    Json,
    /// TOML with the same keys
    Toml,
    /// BREWENV_* variables, one per line
    Dotenv,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Toml => ExportFormat::Toml,
            FormatArg::Dotenv => ExportFormat::Dotenv,
        }
    }
}

/// CLI arguments for brewenv
#[derive(Parser, Debug)]
#[command(name = "brewenv")]
#[command(author, version, about = "Per-deployment environment records for the coffee shop client")]
#[command(long_about = r#"
brewenv resolves the environment record (API server URL and Auth0 settings)
that the client application is built against.

Configuration is merged from (in priority order):
1. BREWENV_* variables   e.g. BREWENV_AUTH0__CLIENTID=...
2. --config <path>       Explicit config file
3. ./brewenv.toml        Project-level config
4. ~/.config/brewenv/config.toml   Global config
5. Built-in values for the selected profile

Example:
  brewenv show
  brewenv --profile production show --format dotenv --output .env.production
  brewenv --profile production validate
  brewenv login-url
"#)]
pub struct Cli {
    /// Deployment profile to resolve
    #[arg(short, long, value_enum, default_value = "development", global = true)]
    pub profile: ProfileArg,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files and environment variables
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the resolved environment record
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: FormatArg,

        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Replace the output file if it exists
        #[arg(long)]
        force: bool,
    },

    /// Check the resolved record; exits with status 1 on errors
    Validate,

    /// Show configuration file locations
    Sources,

    /// Print the Auth0 login link, issuer and key-set URL
    LoginUrl,

    /// Write a starter brewenv.toml
    Init {
        /// Where to write the file
        #[arg(value_name = "PATH", default_value = "brewenv.toml")]
        path: PathBuf,

        /// Replace the file if it exists
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_show_with_global_flags() {
        let cli = Cli::try_parse_from([
            "brewenv", "show", "--format", "dotenv", "--profile", "prod", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.profile, ProfileArg::Production);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Show { format, output, force } => {
                assert_eq!(format, FormatArg::Dotenv);
                assert!(output.is_none());
                assert!(!force);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["brewenv", "validate"]).unwrap();
        assert_eq!(Profile::from(cli.profile), Profile::Development);
        assert!(cli.config.is_none());
        assert!(!cli.no_config);
        assert!(matches!(cli.command, Command::Validate));
    }

    #[test]
    fn test_init_default_path() {
        let cli = Cli::try_parse_from(["brewenv", "init"]).unwrap();
        match cli.command {
            Command::Init { path, force } => {
                assert_eq!(path, PathBuf::from("brewenv.toml"));
                assert!(!force);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["brewenv"]).is_err());
    }

    #[test]
    fn test_format_conversion() {
        assert_eq!(ExportFormat::from(FormatArg::Toml), ExportFormat::Toml);
    }
}

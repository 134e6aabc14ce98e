//! Rendering a record as JSON, TOML or dotenv

use crate::config::{DEFAULT_ENV_PREFIX, ENV_KEY_SEPARATOR, Result};
use brewenv_domain::EnvironmentConfig;
use brewenv_domain::environment::validation::field;
use std::fmt;

/// Output format for an exported record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Pretty-printed JSON with the client's field names (default)
    #[default]
    Json,
    /// TOML with the same keys
    Toml,
    /// `KEY=value` lines using the loader's `BREWENV_*` names
    Dotenv,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Toml => write!(f, "toml"),
            ExportFormat::Dotenv => write!(f, "dotenv"),
        }
    }
}

/// Render `record` in `format`
pub fn render(record: &EnvironmentConfig, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => {
            let mut json = serde_json::to_string_pretty(record)?;
            json.push('\n');
            Ok(json)
        }
        ExportFormat::Toml => Ok(toml::to_string_pretty(record)?),
        ExportFormat::Dotenv => Ok(render_dotenv(record)),
    }
}

/// Environment variable name the loader reads for a record field,
/// e.g. `auth0.clientId` -> `BREWENV_AUTH0__CLIENTID`
pub fn dotenv_key(field_name: &str) -> String {
    format!(
        "{}{}",
        DEFAULT_ENV_PREFIX,
        field_name.replace('.', ENV_KEY_SEPARATOR).to_uppercase()
    )
}

fn render_dotenv(record: &EnvironmentConfig) -> String {
    let auth0 = record.auth0();
    let production = record.production_mode().to_string();

    [
        (field::PRODUCTION, production.as_str()),
        (field::API_SERVER_URL, record.api_server_url()),
        (field::AUTH0_URL, auth0.url()),
        (field::AUTH0_AUDIENCE, auth0.audience()),
        (field::AUTH0_CLIENT_ID, auth0.client_id()),
        (field::AUTH0_CALLBACK_URL, auth0.callback_url()),
    ]
    .into_iter()
    .map(|(name, value)| format!("{}={}\n", dotenv_key(name), dotenv_value(value)))
    .collect()
}

/// Values that a loader would read back as something other than text
/// (`true`, `2024`, `1.5`) are quoted along with the unsafe ones.
fn dotenv_value(value: &str) -> String {
    let plain = !value.is_empty()
        && !looks_like_scalar(value)
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._:/-@?&=%+~,".contains(c));
    if plain {
        value.to_string()
    } else {
        format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
    }
}

fn looks_like_scalar(value: &str) -> bool {
    value.parse::<bool>().is_ok() || value.parse::<i64>().is_ok() || value.parse::<f64>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use brewenv_domain::{Auth0Config, Profile};
    use figment::Jail;

    /// Strip the quoting a dotenv loader removes before exporting a value
    fn unquote(value: &str) -> String {
        match value.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
            Some(inner) => inner.replace("\\\"", "\"").replace("\\\\", "\\"),
            None => value.to_string(),
        }
    }

    #[test]
    fn test_format_display() {
        assert_eq!(ExportFormat::default().to_string(), "json");
        assert_eq!(ExportFormat::Dotenv.to_string(), "dotenv");
    }

    #[test]
    fn test_dotenv_key() {
        assert_eq!(dotenv_key(field::PRODUCTION), "BREWENV_PRODUCTION");
        assert_eq!(dotenv_key(field::API_SERVER_URL), "BREWENV_APISERVERURL");
        assert_eq!(dotenv_key(field::AUTH0_CLIENT_ID), "BREWENV_AUTH0__CLIENTID");
        assert_eq!(
            dotenv_key(field::AUTH0_CALLBACK_URL),
            "BREWENV_AUTH0__CALLBACKURL"
        );
    }

    #[test]
    fn test_render_json_shape() {
        let json = render(&EnvironmentConfig::development(), ExportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["production"], serde_json::json!(false));
        assert_eq!(value["auth0"]["callbackURL"], "http://localhost:4200");
        assert!(json.ends_with("}\n"));
    }

    #[test]
    fn test_render_toml_parses_back() {
        let toml_str = render(&EnvironmentConfig::production(), ExportFormat::Toml).unwrap();
        assert!(toml_str.contains("[auth0]"));
        let parsed: EnvironmentConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, EnvironmentConfig::production());
    }

    #[test]
    fn test_render_dotenv_lines() {
        let dotenv = render(&EnvironmentConfig::development(), ExportFormat::Dotenv).unwrap();
        let lines: Vec<&str> = dotenv.lines().collect();
        assert_eq!(
            lines,
            vec![
                "BREWENV_PRODUCTION=false",
                "BREWENV_APISERVERURL=http://127.0.0.1:5000",
                "BREWENV_AUTH0__URL=amack.us",
                "BREWENV_AUTH0__AUDIENCE=CoffeeShop",
                "BREWENV_AUTH0__CLIENTID=zC2eLAAz1QXKGVTqOOT81txy7pKBqGBc",
                "BREWENV_AUTH0__CALLBACKURL=http://localhost:4200",
            ]
        );
    }

    #[test]
    fn test_dotenv_quotes_awkward_values() {
        assert_eq!(dotenv_value("Coffee Shop"), "\"Coffee Shop\"");
        assert_eq!(dotenv_value("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(dotenv_value(""), "\"\"");
    }

    #[test]
    fn test_dotenv_quotes_number_and_boolean_text() {
        assert_eq!(dotenv_value("2024"), "\"2024\"");
        assert_eq!(dotenv_value("true"), "\"true\"");
        assert_eq!(dotenv_value("1.5"), "\"1.5\"");
        assert_eq!(dotenv_value("-7"), "\"-7\"");
        assert_eq!(dotenv_value("v2024"), "v2024");
    }

    #[test]
    fn test_dotenv_reloads_to_same_record() {
        let record = EnvironmentConfig::new(
            true,
            "https://api.coffee.example",
            Auth0Config::new("coffee", "Menu", "client-abc", "https://coffee.example"),
        );
        let dotenv = render(&record, ExportFormat::Dotenv).unwrap();

        Jail::expect_with(|jail| {
            for line in dotenv.lines() {
                let (key, value) = line
                    .split_once('=')
                    .ok_or_else(|| format!("malformed line: {}", line))?;
                jail.set_env(key, unquote(value));
            }

            let loaded = ConfigLoader::new(Profile::Production)
                .with_project_dir(jail.directory())
                .with_global_path(None)
                .load_record(None)
                .map_err(|e| e.to_string())?;
            assert_eq!(loaded, record);
            Ok(())
        });
    }

    #[test]
    fn test_dotenv_with_numeric_values_reloads_to_same_record() {
        let record = EnvironmentConfig::new(
            false,
            "http://127.0.0.1:5000",
            Auth0Config::new("amack.us", "2024", "123456", "http://localhost:4200"),
        );
        let dotenv = render(&record, ExportFormat::Dotenv).unwrap();
        assert!(dotenv.contains("BREWENV_AUTH0__AUDIENCE=\"2024\"\n"));

        Jail::expect_with(|jail| {
            for line in dotenv.lines() {
                let (key, value) = line
                    .split_once('=')
                    .ok_or_else(|| format!("malformed line: {}", line))?;
                jail.set_env(key, unquote(value));
            }

            let loaded = ConfigLoader::new(Profile::Development)
                .with_project_dir(jail.directory())
                .with_global_path(None)
                .load_record(None)
                .map_err(|e| e.to_string())?;
            assert_eq!(loaded, record);
            Ok(())
        });
    }
}

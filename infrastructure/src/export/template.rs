//! Starter `brewenv.toml`

use brewenv_domain::EnvironmentConfig;

/// Commented starter config whose `[default]` table holds `seed`'s values
pub fn template(seed: &EnvironmentConfig) -> String {
    let auth0 = seed.auth0();
    format!(
        r#"# brewenv configuration
#
# Tables are profiles: [default] applies to every profile, [development]
# and [production] override it when selected with --profile.
# BREWENV_* environment variables override anything set here,
# e.g. BREWENV_AUTH0__CLIENTID=...

[default]
# Base URL of the backend API server
apiServerUrl = "{api}"

[default.auth0]
# Auth0 domain prefix (expanded to <prefix>.auth0.com)
url = "{url}"
# Audience configured for the API in Auth0
audience = "{audience}"
# Client id generated for the application
clientId = "{client_id}"
# Where Auth0 redirects after login
callbackURL = "{callback}"

[development]
production = false

[production]
production = true
# apiServerUrl = "https://api.example.com"
#
# [production.auth0]
# callbackURL = "https://app.example.com"
"#,
        api = seed.api_server_url(),
        url = auth0.url(),
        audience = auth0.audience(),
        client_id = auth0.client_id(),
        callback = auth0.callback_url(),
    )
}

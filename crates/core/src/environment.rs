//! Environment record of the companion front-end.
//!
//! A plain set of constants with development defaults. Any value can be
//! overridden from process environment variables.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Front-end environment: production flag, API base URL and Auth0 settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    pub production: bool,
    /// Base URL of the running API server.
    pub api_server_url: String,
    pub auth0: Auth0Config,
}

/// Auth0 application descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Auth0Config {
    /// Tenant domain prefix (`{url}.auth0.com`).
    pub url: String,
    pub audience: String,
    pub client_id: String,
    /// Base URL of the front-end that Auth0 redirects back to.
    #[serde(rename = "callbackURL")]
    pub callback_url: String,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            production: false,
            api_server_url: "http://127.0.0.1:5000".into(),
            auth0: Auth0Config::default(),
        }
    }
}

impl Default for Auth0Config {
    fn default() -> Self {
        Self {
            url: "aeg".into(),
            audience: "coffee".into(),
            client_id: "KwRoqoZiq8igvRHhHSyot7QS1w4U9nE7".into(),
            callback_url: "http://localhost:8100".into(),
        }
    }
}

impl Environment {
    /// Load the record from environment variables, falling back to the
    /// development defaults.
    ///
    /// | Env Var              | Default                            |
    /// |----------------------|------------------------------------|
    /// | `PRODUCTION`         | `false`                            |
    /// | `API_SERVER_URL`     | `http://127.0.0.1:5000`            |
    /// | `AUTH0_URL`          | `aeg`                              |
    /// | `AUTH0_AUDIENCE`     | `coffee`                           |
    /// | `AUTH0_CLIENT_ID`    | `KwRoqoZiq8igvRHhHSyot7QS1w4U9nE7` |
    /// | `AUTH0_CALLBACK_URL` | `http://localhost:8100`            |
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Environment::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let production = match lookup("PRODUCTION") {
            Some(raw) => parse_bool("PRODUCTION", &raw)?,
            None => defaults.production,
        };

        Ok(Self {
            production,
            api_server_url: lookup("API_SERVER_URL").unwrap_or(defaults.api_server_url),
            auth0: Auth0Config {
                url: lookup("AUTH0_URL").unwrap_or(defaults.auth0.url),
                audience: lookup("AUTH0_AUDIENCE").unwrap_or(defaults.auth0.audience),
                client_id: lookup("AUTH0_CLIENT_ID").unwrap_or(defaults.auth0.client_id),
                callback_url: lookup("AUTH0_CALLBACK_URL")
                    .unwrap_or(defaults.auth0.callback_url),
            },
        })
    }
}

impl Auth0Config {
    /// Full tenant domain, e.g. `aeg.auth0.com`.
    pub fn domain(&self) -> String {
        format!("{}.auth0.com", self.url)
    }

    /// Hosted-login link using the implicit token flow.
    pub fn authorize_url(&self) -> String {
        format!(
            "https://{domain}/authorize?audience={audience}&response_type=token&client_id={client_id}&redirect_uri={redirect}",
            domain = self.domain(),
            audience = urlencoding::encode(&self.audience),
            client_id = urlencoding::encode(&self.client_id),
            redirect = urlencoding::encode(&self.callback_url),
        )
    }
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, CoreError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(CoreError::Config {
            key,
            message: format!("expected a boolean, got {other:?}"),
        }),
    }
}

use std::time::Duration;

use fyyur_core::CoreError;

/// Client configuration loaded from environment variables.
///
/// All fields have defaults suitable for a local development server.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the venue server, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".into(),
            request_timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `FYYUR_API_URL`        | `http://127.0.0.1:5000` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let base_url = lookup("FYYUR_API_URL").unwrap_or(defaults.base_url);

        let request_timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse().map_err(|e| CoreError::Config {
                key: "REQUEST_TIMEOUT_SECS",
                message: format!("must be a valid u64: {e}"),
            })?,
            None => defaults.request_timeout_secs,
        };

        Ok(Self::new(base_url).with_timeout_secs(request_timeout_secs))
    }

    /// Config for `base_url` with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

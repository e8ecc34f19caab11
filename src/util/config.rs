//! Runtime configuration read from the environment (and an optional `.env` file).

use std::env;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

pub const API_URL_VAR: &str = "PERFORMER_API_URL";
pub const API_TIMEOUT_VAR: &str = "PERFORMER_API_TIMEOUT_SECS";

const DEFAULT_API_URL: &str = "http://localhost:8080/api/";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid API URL '{value}': {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("API URL must use http or https, got '{0}'")]
    UnsupportedScheme(String),
    #[error("invalid timeout '{0}', expected a positive number of seconds")]
    InvalidTimeout(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Always ends with `/`.
    pub api_base_url: String,
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    /// Loads `.env` if present, then reads the process environment. Bad values are logged and
    /// replaced by defaults so the console still starts.
    pub fn load() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "loaded .env file"),
            Err(err) if err.not_found() => {}
            Err(err) => warn!(%err, "ignoring unreadable .env file"),
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(API_URL_VAR) {
            match parse_base_url(&raw) {
                Ok(url) => config.api_base_url = url.into(),
                Err(err) => warn!(%err, "falling back to {DEFAULT_API_URL}"),
            }
        }

        if let Some(raw) = lookup(API_TIMEOUT_VAR) {
            match parse_timeout(&raw) {
                Ok(timeout) => config.request_timeout = timeout,
                Err(err) => warn!(%err, "falling back to {DEFAULT_TIMEOUT_SECS}s"),
            }
        }

        config
    }
}

/// Parses the API base and makes sure it ends with `/` so relative joins keep the `/api` part.
pub fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let trimmed = raw.trim();
    let normalized = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };

    let url = Url::parse(&normalized).map_err(|source| ConfigError::InvalidUrl {
        value: trimmed.to_string(),
        source,
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme(other.to_string())),
    }
}

pub fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
        .ok_or_else(|| ConfigError::InvalidTimeout(raw.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_point_at_local_backend() {
        let config = config_from(&[]);
        assert_eq!(config.api_base_url, "http://localhost:8080/api/");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn base_url_gains_trailing_slash() {
        let config = config_from(&[(API_URL_VAR, "https://quotes.example.com/api")]);
        assert_eq!(config.api_base_url, "https://quotes.example.com/api/");
        assert_eq!(
            parse_base_url(&config.api_base_url)
                .unwrap()
                .join("cotizaciones")
                .unwrap()
                .as_str(),
            "https://quotes.example.com/api/cotizaciones"
        );
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = config_from(&[(API_URL_VAR, "ftp://files"), (API_TIMEOUT_VAR, "0")]);
        assert_eq!(config, AppConfig::default());

        assert!(matches!(
            parse_base_url("not a url"),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            parse_timeout("soon"),
            Err(ConfigError::InvalidTimeout(value)) if value == "soon"
        ));
        assert_eq!(parse_timeout(" 30 ").unwrap(), Duration::from_secs(30));
    }
}

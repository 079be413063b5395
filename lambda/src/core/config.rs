use std::env;
use std::time::Duration;

use crate::errors::WeatherError;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub base_url: String,
    pub request_timeout: Duration,
}

impl AppConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::Config`] when `OWM_KEY` is missing or empty, or
    /// when `OWM_TIMEOUT_SECS` is not a positive integer.
    pub fn from_env() -> Result<Self, WeatherError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads values through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, WeatherError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("OWM_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| WeatherError::Config("OWM_KEY is not set".to_string()))?;

        let base_url = lookup("OWM_BASE_URL")
            .filter(|url| !url.trim().is_empty())
            .map_or_else(
                || DEFAULT_BASE_URL.to_string(),
                |url| url.trim_end_matches('/').to_string(),
            );

        let request_timeout = match lookup("OWM_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .ok_or_else(|| {
                        WeatherError::Config(format!(
                            "OWM_TIMEOUT_SECS must be a positive integer, got {raw:?}"
                        ))
                    })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            api_key,
            base_url,
            request_timeout,
        })
    }
}

//! OpenWeatherMap API client module
//!
//! Encapsulates the single "current weather" call the handler makes.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::borrow::Cow;
use tracing::{debug, info};
use url::Url;

use crate::core::config::AppConfig;
use crate::core::models::WeatherReport;
use crate::errors::WeatherError;

const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";
const UNITS: &str = "imperial";
const REDACTED: &str = "REDACTED";

/// Source of current conditions for a location.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current_weather(&self, location: &str) -> Result<WeatherReport, WeatherError>;
}

/// Error payload OpenWeatherMap sends alongside non-2xx statuses,
/// e.g. `{"cod":"404","message":"city not found"}`.
#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    #[serde(default)]
    message: String,
}

/// Builds `{base}/data/2.5/weather?appid=..&units=imperial&q=..` with every
/// query value percent-encoded.
///
/// # Errors
///
/// Returns [`WeatherError::Config`] if `base_url` is not a valid absolute URL.
pub fn build_weather_url(base_url: &str, api_key: &str, location: &str) -> Result<Url, WeatherError> {
    let mut url = Url::parse(&format!(
        "{}{CURRENT_WEATHER_PATH}",
        base_url.trim_end_matches('/')
    ))
    .map_err(|e| WeatherError::Config(format!("invalid provider base URL {base_url:?}: {e}")))?;

    url.query_pairs_mut()
        .append_pair("appid", api_key)
        .append_pair("units", UNITS)
        .append_pair("q", location);

    Ok(url)
}

/// Renders `url` for logging with the `appid` value masked.
#[must_use]
pub fn redact_api_key(url: &Url) -> String {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "appid" { Cow::Borrowed(REDACTED) } else { v };
            (k.into_owned(), v.into_owned())
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}

/// `reqwest`-backed [`WeatherProvider`] for OpenWeatherMap.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    /// Creates a client whose requests are bounded by `config.request_timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::Config`] if the HTTP client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, WeatherError> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| WeatherError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn weather_url(&self, location: &str) -> Result<Url, WeatherError> {
        build_weather_url(&self.base_url, &self.api_key, location)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current_weather(&self, location: &str) -> Result<WeatherReport, WeatherError> {
        let url = self.weather_url(location)?;
        info!(api = %redact_api_key(&url), "Requesting current weather");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "Weather provider responded");

        if !status.is_success() {
            let message = serde_json::from_str::<ProviderErrorBody>(&body)
                .ok()
                .map(|b| b.message)
                .filter(|m| !m.is_empty())
                .or_else(|| status.canonical_reason().map(ToString::to_string))
                .unwrap_or_default();
            return Err(WeatherError::ProviderStatus {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

//! Weather API handler.
//!
//! Runs one request through validate → fetch → compose → encode and turns
//! any failure into a status-coded response paired with its error.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::{error, info};

use super::{helpers, parsing};
use crate::clients::{OpenWeatherClient, WeatherProvider};
use crate::core::config::AppConfig;
use crate::core::models::{ProxyRequest, ProxyResponse, WeatherReport};
use crate::core::summary::{compose_message, encode_message_body};
use crate::errors::WeatherError;

/// Time kept back from the invocation deadline so the response still goes out.
const DEADLINE_MARGIN: Duration = Duration::from_millis(250);

/// A failed invocation: the response to send and the error behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub response: ProxyResponse,
    pub error: WeatherError,
}

impl From<WeatherError> for Rejection {
    fn from(error: WeatherError) -> Self {
        let response = helpers::err_response(error.status_code(), &error.public_message());
        Self { response, error }
    }
}

pub struct WeatherHandler<P = OpenWeatherClient> {
    provider: P,
}

impl WeatherHandler<OpenWeatherClient> {
    /// # Errors
    ///
    /// Returns [`WeatherError::Config`] if the HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, WeatherError> {
        Ok(Self::new(OpenWeatherClient::new(config)?))
    }
}

impl<P: WeatherProvider> WeatherHandler<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Handles one request with no deadline beyond the provider's own timeout.
    ///
    /// # Errors
    ///
    /// Returns a [`Rejection`] with a 400 response when no location is given
    /// and a 500 response for any failure after validation.
    pub async fn handle(&self, request: &ProxyRequest) -> Result<ProxyResponse, Rejection> {
        self.handle_within(request, None).await
    }

    /// Like [`WeatherHandler::handle`], but abandons the provider call once
    /// `budget` has elapsed.
    ///
    /// # Errors
    ///
    /// See [`WeatherHandler::handle`].
    pub async fn handle_within(
        &self,
        request: &ProxyRequest,
        budget: Option<Duration>,
    ) -> Result<ProxyResponse, Rejection> {
        info!(
            request_id = request.request_context.request_id.as_deref().unwrap_or(""),
            path = request.path.as_deref().unwrap_or(""),
            "Weather request received"
        );

        self.respond(request, budget).await.map_err(|e| {
            error!(status = e.status_code(), "Weather request failed: {}", e);
            Rejection::from(e)
        })
    }

    async fn respond(
        &self,
        request: &ProxyRequest,
        budget: Option<Duration>,
    ) -> Result<ProxyResponse, WeatherError> {
        let location = parsing::extract_location(request)?;
        let report = self.fetch(location, budget).await?;
        let message = compose_message(&report)?;
        let body = encode_message_body(&message)?;
        Ok(helpers::ok_json(body))
    }

    async fn fetch(
        &self,
        location: &str,
        budget: Option<Duration>,
    ) -> Result<WeatherReport, WeatherError> {
        let call = self.provider.current_weather(location);
        match budget {
            Some(budget) => tokio::time::timeout(budget, call)
                .await
                .map_err(|_| WeatherError::Timeout)?,
            None => call.await,
        }
    }
}

/// Time left before `deadline_ms` (epoch millis), minus [`DEADLINE_MARGIN`].
/// `None` when the runtime gave no deadline.
fn remaining_budget(deadline_ms: u64) -> Option<Duration> {
    if deadline_ms == 0 {
        return None;
    }
    let now = SystemTime::now().duration_since(UNIX_EPOCH).ok()?;
    Some(
        Duration::from_millis(deadline_ms)
            .saturating_sub(now)
            .saturating_sub(DEADLINE_MARGIN),
    )
}

/// Lambda handler for the API entrypoint.
///
/// Failures are logged and returned as `Ok` responses so API Gateway relays
/// their status code instead of a generic invocation error.
///
/// # Errors
///
/// Never returns `Err`; the signature matches what `lambda_runtime` expects.
#[tracing::instrument(level = "info", skip_all, fields(aws_request_id = %event.context.request_id))]
pub async fn function_handler<P: WeatherProvider>(
    handler: &WeatherHandler<P>,
    event: LambdaEvent<Value>,
) -> Result<ProxyResponse, Error> {
    let (payload, context) = event.into_parts();

    let mut request = match parsing::parse_event(payload) {
        Ok(request) => request,
        Err(e) => {
            error!("Rejecting malformed event: {}", e);
            return Ok(Rejection::from(e).response);
        }
    };
    if request.request_context.request_id.is_none() {
        request.request_context.request_id = Some(context.request_id.clone());
    }

    let budget = remaining_budget(context.deadline);
    match handler.handle_within(&request, budget).await {
        Ok(response) => Ok(response),
        Err(rejection) => Ok(rejection.response),
    }
}

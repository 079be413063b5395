/// OWM Weather - an AWS Lambda that answers `GET /weather/{id}` with a
/// one-line summary of the current OpenWeatherMap conditions for `id`.
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda (API Gateway proxy integration) for serverless execution
/// - reqwest for the single OpenWeatherMap call per request
/// - Tokio for async runtime and the invocation deadline timeout
///
/// # Example
///
/// ```no_run
/// use owm_weather::api::WeatherHandler;
/// use owm_weather::core::config::AppConfig;
/// use owm_weather::core::models::ProxyRequest;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Set up structured logging
///     owm_weather::setup_logging();
///
///     let config = AppConfig::new("dummy_owm_key");
///     let handler = WeatherHandler::from_config(&config)?;
///
///     match handler.handle(&ProxyRequest::with_location("Seattle")).await {
///         Ok(response) => println!("{}", response.body),
///         Err(rejection) => eprintln!("{} ({})", rejection.error, rejection.response.status_code),
///     }
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod api;
pub mod clients;
pub mod core;
pub mod errors;

pub use errors::WeatherError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration, filtered by `RUST_LOG` (default `info`).
/// Calling it again after a subscriber is installed is a no-op.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// owm_weather::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

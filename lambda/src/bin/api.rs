use owm_weather::api::{WeatherHandler, handler};
use owm_weather::core::config::AppConfig;
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    owm_weather::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        lambda_runtime::Error::from(e)
    })?;
    let weather = WeatherHandler::from_config(&config)?;

    lambda_runtime::run(lambda_runtime::service_fn(|event| handler(&weather, event))).await
}

use serde_json::Value;

use crate::core::models::ProxyRequest;
use crate::errors::WeatherError;

/// Path parameter holding the location query, as in `/weather/{id}`.
pub const LOCATION_PARAM: &str = "id";

pub fn parse_event(payload: Value) -> Result<ProxyRequest, WeatherError> {
    serde_json::from_value(payload).map_err(|e| WeatherError::InvalidEvent(e.to_string()))
}

/// Returns the location exactly as received. Empty values count as missing.
pub fn extract_location(request: &ProxyRequest) -> Result<&str, WeatherError> {
    request
        .path_parameters
        .as_ref()
        .and_then(|params| params.get(LOCATION_PARAM))
        .map(String::as_str)
        .filter(|location| !location.is_empty())
        .ok_or(WeatherError::NoLocation)
}

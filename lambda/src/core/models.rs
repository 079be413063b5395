use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

// ============================================================================
// API Gateway proxy event
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRequest {
    #[serde(default, alias = "rawPath")]
    pub path: Option<String>,
    #[serde(default)]
    pub path_parameters: Option<HashMap<String, String>>,
    #[serde(default)]
    pub request_context: RequestContext,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    #[serde(default)]
    pub request_id: Option<String>,
}

impl ProxyRequest {
    /// Request carrying a single `id` path parameter. Mostly useful in tests.
    pub fn with_location(location: &str) -> Self {
        Self {
            path: Some(format!("/weather/{location}")),
            path_parameters: Some(HashMap::from([("id".to_string(), location.to_string())])),
            request_context: RequestContext::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

// ============================================================================
// OpenWeatherMap current weather payload
// ============================================================================

/// Decoded `/data/2.5/weather` response. Missing or `null` fields fall back to
/// zero values. Decimal readings are `f32`; the summary rounds that value, so a
/// temperature of 55.15 reads as 55.2.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WeatherReport {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub visibility: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub coord: Coord,
    #[serde(deserialize_with = "null_as_default")]
    pub weather: Vec<Condition>,
    #[serde(deserialize_with = "null_as_default")]
    pub main: MainReadings,
    #[serde(deserialize_with = "null_as_default")]
    pub wind: Wind,
    #[serde(deserialize_with = "null_as_default")]
    pub clouds: Clouds,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Coord {
    #[serde(deserialize_with = "null_as_default")]
    pub lon: f32,
    #[serde(deserialize_with = "null_as_default")]
    pub lat: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Condition {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub main: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MainReadings {
    #[serde(deserialize_with = "null_as_default")]
    pub temp: f32,
    #[serde(deserialize_with = "null_as_default")]
    pub pressure: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub humidity: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub temp_min: f32,
    #[serde(deserialize_with = "null_as_default")]
    pub temp_max: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Wind {
    #[serde(deserialize_with = "null_as_default")]
    pub speed: f32,
    #[serde(deserialize_with = "null_as_default")]
    pub deg: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Clouds {
    #[serde(deserialize_with = "null_as_default")]
    pub all: i64,
}

/// Treats an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

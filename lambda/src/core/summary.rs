//! Turns a decoded weather report into the response sentence and JSON body.

use serde_json::json;

use crate::core::models::WeatherReport;
use crate::errors::WeatherError;

/// Builds the one-line summary for `report`.
///
/// # Errors
///
/// Returns [`WeatherError::MissingConditions`] when the provider sent no
/// weather conditions to describe.
pub fn compose_message(report: &WeatherReport) -> Result<String, WeatherError> {
    let condition = report
        .weather
        .first()
        .ok_or(WeatherError::MissingConditions)?;

    Ok(format!(
        "Weather for {} is {:.1}° F with {}, {:.1} MPH winds and {}% humidity",
        report.name, report.main.temp, condition.description, report.wind.speed, report.main.humidity
    ))
}

/// Wraps `message` as `{"message": ...}` and HTML-escapes the encoded JSON.
///
/// # Errors
///
/// Returns [`WeatherError::Encode`] if serialization fails.
pub fn encode_message_body(message: &str) -> Result<String, WeatherError> {
    let body = serde_json::to_string(&json!({ "message": message }))
        .map_err(|e| WeatherError::Encode(e.to_string()))?;
    Ok(html_escape_json(&body))
}

/// Replaces characters that are unsafe inside `<script>` tags with their JSON
/// `\uXXXX` escapes. The output is still valid JSON with the same meaning.
#[must_use]
pub fn html_escape_json(encoded: &str) -> String {
    let mut out = String::with_capacity(encoded.len());
    for c in encoded.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            other => out.push(other),
        }
    }
    out
}

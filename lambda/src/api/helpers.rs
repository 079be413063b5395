//! Response builders shared by the API handler.

use serde_json::json;
use std::collections::HashMap;

use crate::core::models::ProxyResponse;
use crate::core::summary::html_escape_json;

pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Returns a response with a JSON content type and the given body.
#[must_use]
pub fn json_response(status_code: u16, body: String) -> ProxyResponse {
    ProxyResponse {
        status_code,
        headers: HashMap::from([("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string())]),
        body,
        is_base64_encoded: false,
    }
}

/// Returns a 200 OK response carrying an already encoded JSON body.
#[must_use]
pub fn ok_json(body: String) -> ProxyResponse {
    json_response(200, body)
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> ProxyResponse {
    json_response(
        status_code,
        html_escape_json(&json!({ "error": message }).to_string()),
    )
}

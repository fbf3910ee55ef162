use log::{error, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Error;

/// Decoded body of a successful response
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// `application/json` body
    Json(Value),
    /// `image/*` or `application/octet-stream` body, unmodified
    Bytes(Vec<u8>),
    /// Anything else
    Text(String),
}

impl Payload {
    /// JSON value, if the body was JSON
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Take the JSON value, if the body was JSON
    pub fn into_json(self) -> Option<Value> {
        match self {
            Payload::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Text body, if the response was neither JSON nor binary
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Binary body, if the response was an image or octet stream
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Payload::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Raw bytes of a binary or text payload
    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            Payload::Bytes(bytes) => Some(bytes),
            Payload::Text(text) => Some(text.into_bytes()),
            Payload::Json(_) => None,
        }
    }

    /// Deserialize a JSON payload into a typed value
    pub fn deserialize<T: DeserializeOwned>(self) -> Result<T, Error> {
        match self {
            Payload::Json(value) => serde_json::from_value(value)
                .map_err(|e| Error::client(format!("Failed to deserialize response: {}", e))),
            Payload::Bytes(_) => Err(Error::client("Expected a JSON response, got binary data")),
            Payload::Text(_) => Err(Error::client("Expected a JSON response, got text")),
        }
    }
}

/// Classify a response by status code and decode its body.
///
/// Status precedence: 401, 404, 429, >= 500, then 200/201/204 as success,
/// then any other >= 400. Remaining codes decode as text.
pub fn classify(status: u16, content_type: &str, url: &str, body: Vec<u8>) -> Result<Payload, Error> {
    match status {
        401 => {
            warn!("Authentication failed for {}", url);
            Err(Error::Authentication { status })
        }
        404 => {
            warn!("Resource not found: {}", url);
            Err(Error::NotFound {
                url: url.to_string(),
            })
        }
        429 => {
            warn!("Rate limit exceeded for {}", url);
            Err(Error::RateLimit { status })
        }
        s if s >= 500 => {
            let message = json_message(&body).unwrap_or_else(|| "Server error".to_string());
            error!("Server error {} for {}: {}", status, url, message);
            Err(Error::Server { status, message })
        }
        200 | 201 | 204 => decode(status, content_type, body),
        s if s >= 400 => {
            let message = json_message(&body)
                .or_else(|| text_message(&body))
                .unwrap_or_else(|| "Unknown error".to_string());
            warn!("Request to {} failed with status {}: {}", url, status, message);
            Err(Error::client_status(status, message))
        }
        _ => Ok(Payload::Text(String::from_utf8_lossy(&body).into_owned())),
    }
}

fn decode(status: u16, content_type: &str, body: Vec<u8>) -> Result<Payload, Error> {
    let content_type = content_type.to_ascii_lowercase();

    if content_type.contains("application/json") {
        if body.iter().all(|b| b.is_ascii_whitespace()) {
            return Ok(Payload::Json(Value::Null));
        }
        return serde_json::from_slice(&body).map(Payload::Json).map_err(|e| {
            Error::client_status(status, format!("Failed to parse JSON response: {}", e))
        });
    }

    if content_type.contains("image/") || content_type.contains("application/octet-stream") {
        return Ok(Payload::Bytes(body));
    }

    Ok(Payload::Text(String::from_utf8_lossy(&body).into_owned()))
}

/// `message` field of a JSON error body
fn json_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    match value.get("message")? {
        Value::String(message) => Some(message.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

/// Non-empty UTF-8 error body that is not a JSON object
fn text_message(body: &[u8]) -> Option<String> {
    if let Ok(Value::Object(_)) = serde_json::from_slice::<Value>(body) {
        return None;
    }
    let text = std::str::from_utf8(body).ok()?.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

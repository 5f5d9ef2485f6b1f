//! Adapters for the backend's inconsistent response shapes.
//!
//! The verification service reports success under different field names
//! and error messages arrive either as a flat string or as a list of
//! strings. Everything that reads a raw body goes through here.

use reqwest::StatusCode;
use serde_json::Value;

use super::types::{ApiError, VerifyOutcome};

/// Field names the backend has used for the verification flag, in lookup order.
const VERIFIED_FLAGS: [&str; 3] = ["success", "succase", "ok"];

const MESSAGE_SEPARATOR: &str = ", ";

fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|v| v != 0.0).unwrap_or(false),
        Value::String(s) => matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "1" | "ok"),
        _ => false,
    }
}

/// First verification flag present in `body`, or the status class when none is.
pub fn verified_flag(status: StatusCode, body: &Value) -> bool {
    VERIFIED_FLAGS
        .iter()
        .find_map(|key| body.get(*key))
        .map(truthy)
        .unwrap_or_else(|| status.is_success())
}

fn message_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Array(items) => {
            let parts: Vec<&str> = items
                .iter()
                .filter_map(|item| item.as_str())
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(MESSAGE_SEPARATOR))
            }
        }
        _ => None,
    }
}

/// User-facing message from `message` (string or list of strings), then `error`.
pub fn extract_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(message_text)
        .or_else(|| body.get("error").and_then(message_text))
}

pub fn verify_outcome(status: StatusCode, body: &Value) -> VerifyOutcome {
    VerifyOutcome {
        verified: verified_flag(status, body),
        message: extract_message(body),
    }
}

/// Builds an [`ApiError`] from a non-success response body.
pub fn error_from_body(status: StatusCode, body: &Value) -> ApiError {
    let details = body.get("details").cloned();
    match extract_message(body) {
        Some(message) => ApiError {
            error: message,
            code: body
                .get("code")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP_{}", status.as_u16())),
            details,
        },
        None => ApiError {
            details,
            ..ApiError::unknown(format!("Request failed with status {}", status.as_u16()))
        },
    }
}

/// Parses a body that may be empty or not JSON at all.
pub fn parse_lenient(raw: &str) -> Value {
    if raw.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(raw).unwrap_or(Value::Null)
}

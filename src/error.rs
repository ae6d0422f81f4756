//! API Errors
//!
//! Every failure ends up as one line in the notification banner, so the
//! `Display` output of each variant is what the user reads.

use serde_json::Value;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Non-2xx response; `detail` comes from the backend body
    #[error("{detail}")]
    Http { status: u16, detail: String },
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unexpected response from server: {0}")]
    Decode(String),
    #[error("Browser storage unavailable: {0}")]
    Storage(String),
    #[error("{0}")]
    Invalid(String),
}

impl ApiError {
    pub fn from_response(status: u16, body: &str) -> Self {
        ApiError::Http {
            status,
            detail: detail_from_body(status, body),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

/// Pull a user-facing message out of an error body.
///
/// `detail` is normally a string; request-validation failures send a list
/// of `{loc, msg, type}` objects instead.
pub fn detail_from_body(status: u16, body: &str) -> String {
    let detail = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("detail").cloned());

    let message = match detail {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        Some(Value::Array(entries)) => {
            let msgs: Vec<&str> = entries
                .iter()
                .filter_map(|e| e.get("msg").and_then(Value::as_str))
                .collect();
            (!msgs.is_empty()).then(|| msgs.join("; "))
        }
        _ => None,
    };

    message.unwrap_or_else(|| format!("Request failed with status {}", status))
}

/// Best-effort text for a thrown JS value
pub fn js_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_detail() {
        let body = r#"{"detail":"Maximum of 5 committee members reached."}"#;
        assert_eq!(detail_from_body(403, body), "Maximum of 5 committee members reached.");
    }

    #[test]
    fn test_validation_list_detail() {
        let body = r#"{"detail":[
            {"loc":["body","email"],"msg":"value is not a valid email address","type":"value_error"},
            {"loc":["body","otp"],"msg":"String should have at least 6 characters","type":"string_too_short"}
        ]}"#;
        assert_eq!(
            detail_from_body(422, body),
            "value is not a valid email address; String should have at least 6 characters"
        );
    }

    #[test]
    fn test_missing_detail_falls_back_to_status() {
        assert_eq!(detail_from_body(502, "<html>Bad Gateway</html>"), "Request failed with status 502");
        assert_eq!(detail_from_body(500, r#"{"error":"boom"}"#), "Request failed with status 500");
        assert_eq!(detail_from_body(400, r#"{"detail":"  "}"#), "Request failed with status 400");
    }

    #[test]
    fn test_http_error_displays_detail_verbatim() {
        let err = ApiError::from_response(404, r#"{"detail":"Flat number not found."}"#);
        assert_eq!(err.to_string(), "Flat number not found.");
        assert_eq!(err.status(), Some(404));
    }
}

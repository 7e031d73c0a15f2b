use serde_json::Value;
use thiserror::Error;

/// The four caller-distinguishable failure kinds of an API call.
///
/// `SessionExpired` is special: by the time the caller sees it the
/// session has already been cleared and the login redirect triggered.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Session expired - please log in again")]
    SessionExpired,

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("{0}")]
    Application(String),
}

/// Fallback when the backend flags a failure but ships no message
const DEFAULT_FAILURE_MESSAGE: &str = "The API reported a failure without a message";

/// Extract the application-level failure marker from a parsed payload.
///
/// The backend uses two shapes interchangeably:
/// `{"success": false, "message": "..."}` (auth blueprint) and
/// `{"error": "..."}` (everything else).
pub(crate) fn application_failure(payload: &Value) -> Option<String> {
    if payload.get("success").and_then(Value::as_bool) == Some(false) {
        let message = payload
            .get("message")
            .and_then(Value::as_str)
            .or_else(|| payload.get("error").and_then(Value::as_str))
            .unwrap_or(DEFAULT_FAILURE_MESSAGE);
        return Some(message.to_string());
    }

    payload
        .get("error")
        .and_then(Value::as_str)
        .map(str::to_string)
}

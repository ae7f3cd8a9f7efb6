//! Decoding of the `{"response": ...}` / `{"error": ...}` envelope VK wraps
//! every answer in.

use crate::error::{AppError, UNKNOWN_REMOTE_ERROR};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
struct RawEnvelope {
    #[serde(default)]
    response: Option<Value>,
    #[serde(default)]
    error: Option<Value>,
}

/// Splits a body into its success payload or the application error it carries.
///
/// An `error` object wins over any `response`.
///
/// # Errors
///
/// Returns [`AppError::RemoteService`] with `error.error_msg` (or
/// [`UNKNOWN_REMOTE_ERROR`]) when VK reports an error, and when the body has no
/// `response` at all.
pub fn into_payload(body: Value) -> Result<Value, AppError> {
    let envelope: RawEnvelope = serde_json::from_value(body)
        .map_err(|e| AppError::remote(format!("Malformed response payload: {e}")))?;

    if let Some(error) = envelope.error {
        let message = error
            .get("error_msg")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_REMOTE_ERROR);
        return Err(AppError::remote(message));
    }

    envelope
        .response
        .ok_or_else(|| AppError::remote("Response payload is missing"))
}

/// Like [`into_payload`], then decodes the payload as `T`.
///
/// # Errors
///
/// Same as [`into_payload`], plus [`AppError::RemoteService`] when the payload
/// does not match `T`'s schema.
pub fn decode<T: DeserializeOwned>(body: Value) -> Result<T, AppError> {
    let payload = into_payload(body)?;

    serde_json::from_value(payload)
        .map_err(|e| AppError::remote(format!("Unexpected response payload: {e}")))
}

//! Classification of raw responses into [`ApiError`]s.
//!
//! Every non-2xx status is treated the same way: the body is read in full
//! and mined for a `message` field. A 2xx response is handed back untouched
//! so the executor can decode it.

use serde::de::Error as _;
use serde::Deserialize;
use serde_json::Value;

use crate::clients::errors::ApiError;
use crate::clients::http_response::RawResponse;

/// The subset of a Kong error body this crate understands.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Builds an [`ApiError`] from a status and a fully read body.
///
/// Returns `None` for any status in `200..=299`, whatever the body holds.
///
/// # Example
///
/// ```rust
/// use kong_admin::clients::check_status;
///
/// assert!(check_status(200, b"not even json").is_none());
///
/// let error = check_status(404, br#"{"message": "Not found"}"#).unwrap();
/// assert_eq!(error.code(), 404);
/// assert_eq!(error.message(), "Not found");
/// ```
#[must_use]
pub fn check_status(status: u16, body: &[u8]) -> Option<ApiError> {
    if matches!(status, 200..=299) {
        return None;
    }

    let message = match parse_error_body(body) {
        Ok(parsed) => parsed.message.unwrap_or_default(),
        Err(e) => format!("<failed to parse response body: {e}>"),
    };

    Some(ApiError::with_raw(status, message, body.to_vec()))
}

fn parse_error_body(body: &[u8]) -> Result<ErrorBody, serde_json::Error> {
    match serde_json::from_slice::<Value>(body)? {
        object @ Value::Object(_) => serde_json::from_value(object),
        Value::Null => Ok(ErrorBody { message: None }),
        other => Err(serde_json::Error::custom(format!(
            "expected a JSON object, found {other}"
        ))),
    }
}

/// Classifies a response.
///
/// A 2xx response is returned as `Ok` with its body unread. Any other status
/// consumes the body and yields the corresponding [`ApiError`]. This function
/// never fails for any other reason: a body that cannot be read produces an
/// error with an empty `raw` and a `<failed to read response body: ...>`
/// message.
///
/// # Errors
///
/// Returns the [`ApiError`] describing a non-2xx response.
pub async fn classify(response: RawResponse) -> Result<RawResponse, ApiError> {
    if response.is_success() {
        return Ok(response);
    }

    let status = response.status();
    match response.into_body().await {
        Ok(body) => Err(check_status(status, &body)
            .unwrap_or_else(|| ApiError::with_raw(status, String::new(), body))),
        Err(e) => Err(ApiError::with_raw(
            status,
            format!("<failed to read response body: {e}>"),
            Vec::new(),
        )),
    }
}

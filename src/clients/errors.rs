//! Error types for Kong Admin API requests.
//!
//! # Error Handling
//!
//! - [`ApiError`]: The server answered with a non-2xx status
//! - [`TransportError`]: The transport failed to send a request or read a body
//! - [`HttpError`]: Unified error type returned by every client operation
//!
//! Nothing is retried or recovered internally. Every error reaches the
//! immediate caller unchanged.
//!
//! # Example
//!
//! ```rust,ignore
//! use kong_admin::clients::HttpError;
//!
//! match client.execute::<serde_json::Value>(&ctx, &request).await {
//!     Ok(body) => println!("{body}"),
//!     Err(HttpError::Api(e)) if e.is_not_found() => println!("gone"),
//!     Err(HttpError::Api(e)) => println!("Kong said {}: {}", e.code(), e.message()),
//!     Err(HttpError::Decoding(e)) => println!("unexpected payload: {e}"),
//!     Err(e) if e.is_cancellation() => println!("aborted"),
//!     Err(e) => println!("request failed: {e}"),
//! }
//! ```

use thiserror::Error;

/// A structured error built from a non-2xx Kong response.
///
/// `message` is the `message` field of the JSON body when there is one, an
/// empty string when the body is JSON without it, and a
/// `<failed to parse response body: ...>` diagnostic otherwise. `raw` always
/// holds the exact bytes that were read.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("HTTP status {code} (message: {message:?})")]
pub struct ApiError {
    code: u16,
    message: String,
    raw: Vec<u8>,
}

impl ApiError {
    /// Creates an error with the given status and message and an empty raw body.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kong_admin::ApiError;
    ///
    /// let error = ApiError::new(404, "Not found");
    /// assert!(error.is_not_found());
    /// assert_eq!(error.to_string(), r#"HTTP status 404 (message: "Not found")"#);
    /// ```
    #[must_use]
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            raw: Vec::new(),
        }
    }

    pub(crate) const fn with_raw(code: u16, message: String, raw: Vec<u8>) -> Self {
        Self { code, message, raw }
    }

    /// The HTTP status code of the response.
    #[must_use]
    pub const fn code(&self) -> u16 {
        self.code
    }

    /// The best-effort message extracted from the response body.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The response body exactly as received.
    #[must_use]
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Returns `true` for a 404 response.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        self.code == 404
    }

    /// Returns `true` for a 403 response.
    #[must_use]
    pub const fn is_forbidden(&self) -> bool {
        self.code == 403
    }

    /// Returns `true` for a 409 response.
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        self.code == 409
    }
}

/// A failure inside the HTTP transport (connection, TLS, body stream).
#[derive(Debug, Error)]
#[error("{source}")]
pub struct TransportError {
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl TransportError {
    /// Wraps any error raised by a [`Transport`](crate::clients::Transport) implementation.
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        Self::new(error)
    }
}

/// Unified error type for all client operations.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The caller supplied a malformed or empty required argument.
    ///
    /// No network call was attempted.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// What was wrong with the input.
        reason: String,
    },

    /// The request body could not be serialized; the request was never sent.
    #[error("Failed to encode request body: {0}")]
    Encoding(#[source] serde_json::Error),

    /// The server answered with a non-2xx status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A 2xx response body could not be decoded into the expected shape.
    #[error("Failed to decode response body: {0}")]
    Decoding(#[source] serde_json::Error),

    /// The operation was cancelled through its [`Context`](crate::clients::Context).
    #[error("Operation cancelled")]
    Cancelled,

    /// The deadline of the operation's [`Context`](crate::clients::Context) passed.
    #[error("Operation deadline exceeded")]
    DeadlineExceeded,

    /// The transport failed to send the request or read the response.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

impl HttpError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Returns `true` for [`Cancelled`](Self::Cancelled) and
    /// [`DeadlineExceeded`](Self::DeadlineExceeded).
    #[must_use]
    pub const fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled | Self::DeadlineExceeded)
    }

    /// Returns the API error if the server rejected the request.
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

// Verify errors are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiError>();
    assert_send_sync::<TransportError>();
    assert_send_sync::<HttpError>();
};

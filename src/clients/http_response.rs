//! Raw HTTP responses as handed back by a [`Transport`](crate::clients::Transport).

use std::fmt;

use crate::clients::errors::TransportError;

/// A response whose body has not been read yet.
///
/// The body can be read exactly once: [`into_body`](Self::into_body) consumes
/// the response. Dropping an unread response releases the underlying
/// connection.
pub struct RawResponse {
    status: u16,
    body: Body,
}

enum Body {
    Buffered(Vec<u8>),
    Streaming(reqwest::Response),
    #[cfg(test)]
    Broken(&'static str),
}

impl RawResponse {
    /// Creates a response with an in-memory body.
    ///
    /// Used by custom transports and tests.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kong_admin::RawResponse;
    ///
    /// let response = RawResponse::new(404, r#"{"message":"Not found"}"#);
    /// assert_eq!(response.status(), 404);
    /// assert!(!response.is_success());
    /// ```
    #[must_use]
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: Body::Buffered(body.into()),
        }
    }

    pub(crate) fn from_reqwest(response: reqwest::Response) -> Self {
        Self {
            status: response.status().as_u16(),
            body: Body::Streaming(response),
        }
    }

    /// A response whose body stream fails on read.
    #[cfg(test)]
    pub(crate) const fn broken(status: u16, reason: &'static str) -> Self {
        Self {
            status,
            body: Body::Broken(reason),
        }
    }

    /// The HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Returns `true` for a status in `200..=299`.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.status, 200..=299)
    }

    /// Reads the whole body, consuming the response.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the body stream fails.
    pub async fn into_body(self) -> Result<Vec<u8>, TransportError> {
        match self.body {
            Body::Buffered(bytes) => Ok(bytes),
            Body::Streaming(response) => Ok(response.bytes().await?.to_vec()),
            #[cfg(test)]
            Body::Broken(reason) => Err(TransportError::new(reason)),
        }
    }
}

impl fmt::Debug for RawResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = match &self.body {
            Body::Buffered(bytes) => format!("{} buffered bytes", bytes.len()),
            Body::Streaming(_) => "unread stream".to_string(),
            #[cfg(test)]
            Body::Broken(_) => "broken stream".to_string(),
        };
        f.debug_struct("RawResponse")
            .field("status", &self.status)
            .field("body", &body)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range_boundaries() {
        assert!(!RawResponse::new(199, "").is_success());
        assert!(RawResponse::new(200, "").is_success());
        assert!(RawResponse::new(204, "").is_success());
        assert!(RawResponse::new(299, "").is_success());
        assert!(!RawResponse::new(300, "").is_success());
        assert!(!RawResponse::new(404, "").is_success());
    }

    #[tokio::test]
    async fn test_into_body_returns_buffered_bytes() {
        let response = RawResponse::new(200, b"{\"data\":[]}".to_vec());
        let body = response.into_body().await.unwrap();
        assert_eq!(body, b"{\"data\":[]}");
    }

    #[tokio::test]
    async fn test_broken_body_fails_on_read() {
        let response = RawResponse::broken(200, "connection reset");
        let error = response.into_body().await.unwrap_err();
        assert_eq!(error.to_string(), "connection reset");
    }

    #[test]
    fn test_debug_does_not_dump_body() {
        let response = RawResponse::new(500, "secret payload");
        let debug = format!("{response:?}");
        assert!(debug.contains("500"));
        assert!(debug.contains("14 buffered bytes"));
        assert!(!debug.contains("secret payload"));
    }
}

//! HTTP request types for the Kong Admin client.
//!
//! [`Request::builder`] validates the path, serializes the JSON body, and
//! flattens query parameters. Nothing here touches the network.
//!
//! Path segments are interpolated verbatim. Reserved literals (the `*`
//! endpoint wildcard) are escaped by the resource layer before the path
//! reaches the builder; see [`escape_wildcard_segment`](crate::rest::escape_wildcard_segment).

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::clients::errors::HttpError;

/// HTTP methods used by the Kong Admin API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving entities.
    Get,
    /// HTTP POST method for creating entities.
    Post,
    /// HTTP PATCH method for partial updates.
    Patch,
    /// HTTP PUT method for create-or-replace.
    Put,
    /// HTTP DELETE method for removing entities.
    Delete,
}

impl HttpMethod {
    /// Returns the upper-case method name sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content type of JSON request bodies.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A transport-ready request.
///
/// # Example
///
/// ```rust
/// use kong_admin::clients::{HttpMethod, Request};
/// use serde_json::json;
///
/// let request = Request::builder(HttpMethod::Post, "/rbac/roles")
///     .json(&json!({"name": "auditor"}))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.path(), "/rbac/roles");
/// assert_eq!(request.body(), Some(br#"{"name":"auditor"}"#.as_slice()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    method: HttpMethod,
    path: String,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl Request {
    /// Creates a new builder for constructing a `Request`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(method, path)
    }

    /// The HTTP method.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// The request path, relative to the admin API base URL.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query parameters in insertion order. Empty values never appear here.
    #[must_use]
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Extra headers for this request.
    #[must_use]
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// The serialized JSON body, if any.
    #[must_use]
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Returns the percent-encoded query string without the leading `?`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kong_admin::clients::{HttpMethod, Request};
    ///
    /// let request = Request::builder(HttpMethod::Get, "/files")
    ///     .query_param("path", "specs/my spec.yaml")
    ///     .query_param("size", "100")
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(request.query_string(), "path=specs%2Fmy%20spec.yaml&size=100");
    /// ```
    #[must_use]
    pub fn query_string(&self) -> String {
        self.query
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Returns the path followed by `?query` when there are query parameters.
    #[must_use]
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query_string())
        }
    }
}

/// Builder for constructing [`Request`] instances.
///
/// Serialization happens as values are added, but failures are deferred to
/// [`build`](Self::build) so calls can be chained. Only the first failure is
/// reported.
#[derive(Debug)]
pub struct RequestBuilder {
    method: HttpMethod,
    path: String,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Option<Vec<u8>>,
    error: Option<HttpError>,
}

impl RequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
            error: None,
        }
    }

    /// Adds every field of `params` as a query parameter.
    ///
    /// `params` must serialize to a JSON object. `null` and empty-string
    /// values are skipped, arrays of scalars are comma-joined, and nested
    /// objects are sent as JSON text.
    #[must_use]
    pub fn query<Q: Serialize + ?Sized>(mut self, params: &Q) -> Self {
        if self.error.is_some() {
            return self;
        }
        match serialize_to_query(params) {
            Ok(pairs) => self.query.extend(pairs),
            Err(e) => self.error = Some(e),
        }
        self
    }

    /// Adds a single query parameter. An empty value omits the key entirely.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.query.push((key.into(), value));
        }
        self
    }

    /// Serializes `body` as the JSON request body.
    #[must_use]
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        if self.error.is_some() {
            return self;
        }
        match serde_json::to_vec(body) {
            Ok(bytes) => self.body = Some(bytes),
            Err(e) => self.error = Some(HttpError::Encoding(e)),
        }
        self
    }

    /// Adds a header to this request only.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Builds the [`Request`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidInput`] if the path is empty or the query
    /// parameters are not an object, and [`HttpError::Encoding`] if the body
    /// could not be serialized.
    pub fn build(self) -> Result<Request, HttpError> {
        if self.path.trim().is_empty() {
            return Err(HttpError::invalid_input("request path cannot be empty"));
        }
        if let Some(error) = self.error {
            return Err(error);
        }

        let mut headers = self.headers;
        if self.body.is_some()
            && !headers
                .iter()
                .any(|(name, _)| name.eq_ignore_ascii_case("content-type"))
        {
            headers.push(("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string()));
        }

        Ok(Request {
            method: self.method,
            path: self.path,
            query: self.query,
            headers,
            body: self.body,
        })
    }
}

/// Flattens a serializable params struct into ordered query pairs.
fn serialize_to_query<Q: Serialize + ?Sized>(
    params: &Q,
) -> Result<Vec<(String, String)>, HttpError> {
    let value = serde_json::to_value(params).map_err(HttpError::Encoding)?;

    let Value::Object(map) = value else {
        return Err(HttpError::invalid_input(
            "query parameters must serialize to a JSON object",
        ));
    };

    let mut query = Vec::with_capacity(map.len());
    for (key, val) in map {
        match val {
            Value::Null => {}
            Value::String(s) => {
                if !s.is_empty() {
                    query.push((key, s));
                }
            }
            Value::Number(n) => query.push((key, n.to_string())),
            Value::Bool(b) => query.push((key, b.to_string())),
            Value::Array(arr) => {
                let values: Vec<String> = arr
                    .iter()
                    .filter_map(|v| match v {
                        Value::String(s) if !s.is_empty() => Some(s.clone()),
                        Value::Number(n) => Some(n.to_string()),
                        Value::Bool(b) => Some(b.to_string()),
                        _ => None,
                    })
                    .collect();
                if !values.is_empty() {
                    query.push((key, values.join(",")));
                }
            }
            Value::Object(_) => query.push((key, val.to_string())),
        }
    }

    Ok(query)
}

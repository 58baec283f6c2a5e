//! Pluggable HTTP transport.
//!
//! The client core never opens connections itself. It hands a built
//! [`Request`] to a [`Transport`] and gets back a [`RawResponse`] whose body
//! is still unread. [`ReqwestTransport`] is the default implementation;
//! connection pooling, TLS, and proxies are its concern.

use std::future::Future;

use crate::clients::errors::TransportError;
use crate::clients::http_request::{HttpMethod, Request};
use crate::clients::http_response::RawResponse;
use crate::config::KongConfig;
use crate::error::ConfigError;

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sends requests and returns raw responses.
///
/// Implementations must not read the response body; the caller reads it
/// exactly once.
pub trait Transport: Send + Sync {
    /// Sends `request` and returns the response with its body unread.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the request could not be sent.
    fn send(
        &self,
        request: &Request,
    ) -> impl Future<Output = Result<RawResponse, TransportError>> + Send;
}

/// [`Transport`] backed by a pooled `reqwest` client.
///
/// The request URL is `base_url`, then `/{workspace}` when a workspace is
/// configured, then the request path and query string.
///
/// # Example
///
/// ```rust
/// use kong_admin::{BaseUrl, KongConfig, Workspace};
/// use kong_admin::clients::ReqwestTransport;
///
/// let config = KongConfig::builder()
///     .base_url(BaseUrl::new("http://localhost:8001").unwrap())
///     .workspace(Workspace::new("team-a").unwrap())
///     .build()
///     .unwrap();
///
/// let transport = ReqwestTransport::new(&config).unwrap();
/// assert_eq!(transport.base_uri(), "http://localhost:8001/team-a");
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_uri: String,
    default_headers: Vec<(String, String)>,
}

// Verify ReqwestTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReqwestTransport>();
};

impl ReqwestTransport {
    /// Creates a transport for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Transport`] if the underlying `reqwest` client
    /// cannot be created.
    pub fn new(config: &KongConfig) -> Result<Self, ConfigError> {
        let base_uri = config.workspace().map_or_else(
            || config.base_url().to_string(),
            |workspace| format!("{}/{workspace}", config.base_url()),
        );

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}kong-admin-rust v{SDK_VERSION}");

        let mut default_headers = vec![
            ("User-Agent".to_string(), user_agent),
            ("Accept".to_string(), "application/json".to_string()),
        ];
        default_headers.extend(config.headers().iter().cloned());

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ConfigError::Transport {
            reason: e.to_string(),
        })?;

        tracing::debug!(base_uri = %base_uri, "created Kong admin transport");

        Ok(Self {
            client,
            base_uri,
            default_headers,
        })
    }

    /// Returns the URI every request path is appended to.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub fn default_headers(&self) -> &[(String, String)] {
        &self.default_headers
    }

    /// Returns the full URL for `request`, without the query string.
    #[must_use]
    pub fn url_for(&self, request: &Request) -> String {
        let path = request.path();
        if path.starts_with('/') {
            format!("{}{path}", self.base_uri)
        } else {
            format!("{}/{path}", self.base_uri)
        }
    }
}

impl Transport for ReqwestTransport {
    fn send(
        &self,
        request: &Request,
    ) -> impl Future<Output = Result<RawResponse, TransportError>> + Send {
        let method = match request.method() {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut url = self.url_for(request);
        if !request.query().is_empty() {
            url.push('?');
            url.push_str(&request.query_string());
        }

        let mut builder = self.client.request(method, url);
        for (name, value) in self.default_headers.iter().chain(request.headers()) {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body() {
            builder = builder.body(body.to_vec());
        }

        async move {
            let response = builder.send().await?;
            Ok(RawResponse::from_reqwest(response))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BaseUrl, Workspace};

    fn config() -> KongConfig {
        KongConfig::builder()
            .base_url(BaseUrl::new("http://localhost:8001").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_base_uri_without_workspace() {
        let transport = ReqwestTransport::new(&config()).unwrap();
        assert_eq!(transport.base_uri(), "http://localhost:8001");
    }

    #[test]
    fn test_url_for_joins_path() {
        let transport = ReqwestTransport::new(&config()).unwrap();
        let request = Request::builder(HttpMethod::Get, "/files/1").build().unwrap();
        assert_eq!(transport.url_for(&request), "http://localhost:8001/files/1");

        let request = Request::builder(HttpMethod::Get, "files/1").build().unwrap();
        assert_eq!(transport.url_for(&request), "http://localhost:8001/files/1");
    }

    #[test]
    fn test_workspace_prefixes_paths() {
        let config = KongConfig::builder()
            .base_url(BaseUrl::new("http://localhost:8001/").unwrap())
            .workspace(Workspace::new("team-a").unwrap())
            .build()
            .unwrap();
        let transport = ReqwestTransport::new(&config).unwrap();
        let request = Request::builder(HttpMethod::Get, "/rbac/roles")
            .build()
            .unwrap();

        assert_eq!(
            transport.url_for(&request),
            "http://localhost:8001/team-a/rbac/roles"
        );
    }

    #[test]
    fn test_default_headers() {
        let config = KongConfig::builder()
            .base_url(BaseUrl::new("http://localhost:8001").unwrap())
            .user_agent_prefix("deck/1.0")
            .header("Kong-Admin-Token", "t0k3n")
            .build()
            .unwrap();
        let transport = ReqwestTransport::new(&config).unwrap();
        let headers = transport.default_headers();

        let user_agent = &headers.iter().find(|(k, _)| k == "User-Agent").unwrap().1;
        assert!(user_agent.starts_with("deck/1.0 | kong-admin-rust v"));
        assert!(headers.contains(&("Accept".to_string(), "application/json".to_string())));
        assert!(headers.contains(&("Kong-Admin-Token".to_string(), "t0k3n".to_string())));
    }
}

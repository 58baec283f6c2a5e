//! Configuration types for the Kong Admin client.
//!
//! # Overview
//!
//! - [`KongConfig`]: The configuration consumed by
//!   [`ReqwestTransport`](crate::clients::ReqwestTransport)
//! - [`KongConfigBuilder`]: A builder for constructing [`KongConfig`] instances
//! - [`BaseUrl`]: A validated admin API base URL
//! - [`Workspace`]: A validated workspace name
//!
//! Configuration is instance-based and passed explicitly; nothing is read
//! from files or the environment.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use kong_admin::{BaseUrl, KongConfig, Workspace};
//!
//! let config = KongConfig::builder()
//!     .base_url(BaseUrl::new("http://localhost:8001").unwrap())
//!     .workspace(Workspace::new("default").unwrap())
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "http://localhost:8001");
//! ```

mod newtypes;

pub use newtypes::{BaseUrl, Workspace};

use std::time::Duration;

use reqwest::header::{HeaderName, HeaderValue};

use crate::error::ConfigError;

/// Configuration for talking to a Kong Admin API.
///
/// `KongConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct KongConfig {
    base_url: BaseUrl,
    workspace: Option<Workspace>,
    user_agent_prefix: Option<String>,
    headers: Vec<(String, String)>,
    timeout: Option<Duration>,
}

impl KongConfig {
    /// Creates a new builder for constructing a `KongConfig`.
    #[must_use]
    pub fn builder() -> KongConfigBuilder {
        KongConfigBuilder::new()
    }

    /// Returns the admin API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the workspace requests are scoped to, if any.
    #[must_use]
    pub const fn workspace(&self) -> Option<&Workspace> {
        self.workspace.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the extra headers sent with every request, in insertion order.
    #[must_use]
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Returns the per-request timeout applied by the transport, if any.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// Verify KongConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<KongConfig>();
};

/// Builder for constructing [`KongConfig`] instances.
///
/// `base_url` is required. Everything else is optional.
#[derive(Debug, Default)]
pub struct KongConfigBuilder {
    base_url: Option<BaseUrl>,
    workspace: Option<Workspace>,
    user_agent_prefix: Option<String>,
    headers: Vec<(String, String)>,
    timeout: Option<Duration>,
}

impl KongConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the admin API base URL (required).
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Scopes every request to a workspace.
    #[must_use]
    pub fn workspace(mut self, workspace: Workspace) -> Self {
        self.workspace = Some(workspace);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Adds a header sent with every request.
    ///
    /// Headers are validated by [`build`](Self::build).
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the per-request timeout enforced by the transport.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`KongConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` is not set,
    /// or [`ConfigError::InvalidHeader`] if a header name or value is not a
    /// valid HTTP header.
    pub fn build(self) -> Result<KongConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;

        for (name, value) in &self.headers {
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| ConfigError::InvalidHeader {
                name: name.clone(),
                reason: e.to_string(),
            })?;
            HeaderValue::from_str(value).map_err(|e| ConfigError::InvalidHeader {
                name: name.clone(),
                reason: e.to_string(),
            })?;
        }

        Ok(KongConfig {
            base_url,
            workspace: self.workspace,
            user_agent_prefix: self.user_agent_prefix,
            headers: self.headers,
            timeout: self.timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> BaseUrl {
        BaseUrl::new("http://localhost:8001").unwrap()
    }

    #[test]
    fn test_builder_requires_base_url() {
        let result = KongConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "base_url" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = KongConfig::builder().base_url(base_url()).build().unwrap();

        assert!(config.workspace().is_none());
        assert!(config.user_agent_prefix().is_none());
        assert!(config.headers().is_empty());
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = KongConfig::builder()
            .base_url(base_url())
            .workspace(Workspace::new("team-a").unwrap())
            .user_agent_prefix("deck/1.0")
            .header("Kong-Admin-Token", "secret")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();

        assert_eq!(config.workspace().map(AsRef::as_ref), Some("team-a"));
        assert_eq!(config.user_agent_prefix(), Some("deck/1.0"));
        assert_eq!(
            config.headers(),
            &[("Kong-Admin-Token".to_string(), "secret".to_string())]
        );
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_builder_rejects_invalid_header_name() {
        let result = KongConfig::builder()
            .base_url(base_url())
            .header("bad header", "value")
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidHeader { name, .. }) if name == "bad header"
        ));
    }

    #[test]
    fn test_builder_rejects_invalid_header_value() {
        let result = KongConfig::builder()
            .base_url(base_url())
            .header("X-Test", "line\nbreak")
            .build();

        assert!(matches!(result, Err(ConfigError::InvalidHeader { .. })));
    }

    #[test]
    fn test_config_is_clone_and_debug() {
        let config = KongConfig::builder().base_url(base_url()).build().unwrap();
        let cloned = config.clone();
        assert_eq!(cloned.base_url(), config.base_url());
        assert!(format!("{config:?}").contains("KongConfig"));
    }
}

//! Validated newtypes for Kong client configuration.

use std::fmt;

use crate::error::ConfigError;

/// A validated Kong Admin API base URL.
///
/// The URL must be absolute, use `http` or `https`, and carry a host. A
/// trailing `/` is trimmed so request paths (which start with `/`) can be
/// appended directly.
///
/// # Example
///
/// ```rust
/// use kong_admin::BaseUrl;
///
/// let url = BaseUrl::new("http://localhost:8001/").unwrap();
/// assert_eq!(url.as_ref(), "http://localhost:8001");
/// assert_eq!(url.host_name(), Some("localhost"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    host: String,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL cannot be parsed,
    /// is not `http`/`https`, or has no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = url.into();
        let trimmed = raw.trim();

        let parsed =
            url::Url::parse(trimmed).map_err(|_| ConfigError::InvalidBaseUrl { url: raw.clone() })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl { url: raw });
        }
        let host = match parsed.host_str() {
            Some(host) if !host.is_empty() => host.to_string(),
            _ => return Err(ConfigError::InvalidBaseUrl { url: raw }),
        };

        Ok(Self {
            url: trimmed.trim_end_matches('/').to_string(),
            host,
        })
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        Some(self.host.as_str())
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// A Kong workspace name.
///
/// When configured, every request path is prefixed with `/{workspace}`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Workspace(String);

impl Workspace {
    /// Creates a new validated workspace name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidWorkspace`] if the name is empty or
    /// contains `/`.
    pub fn new(name: impl Into<String>) -> Result<Self, ConfigError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() || trimmed.contains('/') {
            return Err(ConfigError::InvalidWorkspace { workspace: name });
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl AsRef<str> for Workspace {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Workspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

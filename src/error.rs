//! Configuration error types for the Kong Admin client.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that an
//! invalid base URL or workspace is rejected before any request is built.
//!
//! # Example
//!
//! ```rust
//! use kong_admin::{BaseUrl, ConfigError};
//!
//! let result = BaseUrl::new("not a url");
//! assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while building a [`KongConfig`](crate::KongConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The admin API base URL is invalid.
    #[error("Invalid base URL '{url}'. Expected an absolute http(s) URL such as 'http://localhost:8001'.")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// The workspace name is invalid.
    #[error("Invalid workspace '{workspace}'. Workspace names must be non-empty and cannot contain '/'.")]
    InvalidWorkspace {
        /// The invalid workspace that was provided.
        workspace: String,
    },

    /// A default header name or value is invalid.
    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader {
        /// The header name.
        name: String,
        /// Why the header was rejected.
        reason: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The HTTP transport could not be constructed.
    #[error("Failed to create HTTP transport: {reason}")]
    Transport {
        /// The underlying failure.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "ftp:/nowhere".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("ftp:/nowhere"));
        assert!(message.contains("http(s)"));
    }

    #[test]
    fn test_invalid_workspace_error_message() {
        let error = ConfigError::InvalidWorkspace {
            workspace: "a/b".to_string(),
        };
        assert!(error.to_string().contains("a/b"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "base_url" };
        let message = error.to_string();
        assert!(message.contains("base_url"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::MissingRequiredField { field: "base_url" };
        let _: &dyn std::error::Error = &error;
    }
}

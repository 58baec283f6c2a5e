//! # Kong Admin API Rust Client
//!
//! A typed async client for the Kong Admin REST API.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`KongConfig`] and [`KongConfigBuilder`]
//! - Validated newtypes for the base URL and workspace
//! - A request builder that rejects empty paths before anything is sent
//! - Classification of every non-2xx response into an [`ApiError`]
//! - Cursor pagination that either returns every item or the first error
//! - Cancellation and deadlines through [`clients::Context`]
//! - A generic [`rest::Resource`] service with files, RBAC roles and
//!   endpoint permissions built on it
//!
//! ## Quick Start
//!
//! ```rust
//! use kong_admin::{BaseUrl, KongClient, KongConfig};
//!
//! let config = KongConfig::builder()
//!     .base_url(BaseUrl::new("http://localhost:8001").unwrap())
//!     .header("Kong-Admin-Token", "secret")
//!     .build()
//!     .unwrap();
//!
//! let client = KongClient::new(&config).unwrap();
//! ```
//!
//! ## Working With Resources
//!
//! ```rust,ignore
//! use kong_admin::clients::Context;
//! use kong_admin::rest::Resource;
//! use kong_admin::rest::resources::{RbacEndpointPermission, RbacRole};
//!
//! let ctx = Context::background();
//!
//! let role = RbacRole {
//!     name: Some("auditor".to_string()),
//!     ..Default::default()
//! }
//! .create(&client, &ctx)
//! .await?;
//!
//! let permissions =
//!     RbacEndpointPermission::list_all_for_role(&client, &ctx, "auditor").await?;
//! ```
//!
//! ## Errors
//!
//! ```rust,ignore
//! use kong_admin::HttpError;
//!
//! match RbacRole::get(&client, &ctx, &RbacRole::ids("nope")).await {
//!     Err(HttpError::Api(e)) if e.is_not_found() => println!("no such role"),
//!     Err(e) => return Err(e.into()),
//!     Ok(role) => println!("{role:?}"),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **No retries**: Every failure reaches the caller unchanged

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{BaseUrl, KongConfig, KongConfigBuilder, Workspace};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiError, Context, HttpError, HttpMethod, KongClient, ListOpt, Page, RawResponse, Request,
    RequestBuilder, Transport, TransportError,
};

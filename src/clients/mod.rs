//! HTTP client core for the Kong Admin API.
//!
//! This module provides everything resource services are built on:
//!
//! - [`Request`] / [`RequestBuilder`]: validated, transport-ready requests
//! - [`Transport`] / [`ReqwestTransport`]: sends requests, bodies unread
//! - [`classify`] / [`check_status`]: turn non-2xx responses into [`ApiError`]s
//! - [`KongClient`]: executes requests and decodes responses
//! - [`ListOpt`], [`Page`], [`Paginator`]: cursor pagination over list endpoints
//! - [`Context`]: cancellation and deadlines
//! - [`HttpError`]: the unified error type
//!
//! # Example
//!
//! ```rust,ignore
//! use kong_admin::{BaseUrl, KongConfig};
//! use kong_admin::clients::{Context, KongClient};
//!
//! let config = KongConfig::builder()
//!     .base_url(BaseUrl::new("http://localhost:8001")?)
//!     .build()?;
//! let client = KongClient::new(&config)?;
//!
//! let roles: Vec<serde_json::Value> = client
//!     .list_all(&Context::background(), "/rbac/roles")
//!     .await?;
//! ```
//!
//! # Retry Behavior
//!
//! None. Every error reaches the caller on first occurrence.

mod classify;
mod context;
mod errors;
pub(crate) mod http_client;
mod http_request;
mod http_response;
mod pagination;
mod transport;

pub use classify::{check_status, classify};
pub use context::{CancelHandle, Context};
pub use errors::{ApiError, HttpError, TransportError};
pub use http_client::KongClient;
pub use http_request::{HttpMethod, Request, RequestBuilder, JSON_CONTENT_TYPE};
pub use http_response::RawResponse;
pub use pagination::{ListOpt, Page, PageState, Paginator, DEFAULT_PAGE_SIZE};
pub use transport::{ReqwestTransport, Transport, SDK_VERSION};

//! Request execution against the Kong Admin API.
//!
//! [`KongClient`] sends built [`Request`]s through its [`Transport`],
//! classifies the response, and decodes successful bodies. Each call reads
//! the response body exactly once, whichever branch it takes.

use serde::de::DeserializeOwned;

use crate::clients::classify::classify;
use crate::clients::context::Context;
use crate::clients::errors::HttpError;
use crate::clients::http_request::Request;
use crate::clients::http_response::RawResponse;
use crate::clients::transport::{ReqwestTransport, Transport};
use crate::config::KongConfig;
use crate::error::ConfigError;

/// Client for the Kong Admin API.
///
/// The client holds no mutable state; it may be shared by any number of
/// concurrent callers. All per-call state (contexts, cursors, accumulators)
/// lives in the call.
///
/// # Example
///
/// ```rust,ignore
/// use kong_admin::{BaseUrl, KongClient, KongConfig};
/// use kong_admin::clients::{Context, HttpMethod, Request};
///
/// let config = KongConfig::builder()
///     .base_url(BaseUrl::new("http://localhost:8001")?)
///     .build()?;
/// let client = KongClient::new(&config)?;
///
/// let request = Request::builder(HttpMethod::Get, "/rbac/roles/admin").build()?;
/// let role: serde_json::Value = client.execute(&Context::background(), &request).await?;
/// ```
#[derive(Debug, Clone)]
pub struct KongClient<T = ReqwestTransport> {
    transport: T,
}

impl KongClient<ReqwestTransport> {
    /// Creates a client backed by [`ReqwestTransport`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Transport`] if the HTTP client cannot be created.
    pub fn new(config: &KongConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_transport(ReqwestTransport::new(config)?))
    }
}

impl<T: Transport> KongClient<T> {
    /// Creates a client over a custom transport.
    #[must_use]
    pub const fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Returns the transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends `request` and decodes the 2xx body into `D`.
    ///
    /// # Errors
    ///
    /// - [`HttpError::Api`] for a non-2xx response, exactly as classified
    /// - [`HttpError::Decoding`] if the body does not fit `D`
    /// - [`HttpError::Transport`] if sending or reading failed
    /// - [`HttpError::Cancelled`] / [`HttpError::DeadlineExceeded`] from `ctx`
    pub async fn execute<D: DeserializeOwned>(
        &self,
        ctx: &Context,
        request: &Request,
    ) -> Result<D, HttpError> {
        let body = self.roundtrip(ctx, request).await?;
        serde_json::from_slice(&body).map_err(HttpError::Decoding)
    }

    /// Sends `request` and discards the 2xx body.
    ///
    /// The body is still read to the end so the connection can be reused.
    ///
    /// # Errors
    ///
    /// Same as [`execute`](Self::execute), minus decoding failures.
    pub async fn execute_unit(&self, ctx: &Context, request: &Request) -> Result<(), HttpError> {
        self.roundtrip(ctx, request).await.map(drop)
    }

    /// Sends the request, classifies the response, and reads the body once.
    async fn roundtrip(&self, ctx: &Context, request: &Request) -> Result<Vec<u8>, HttpError> {
        ctx.run(async {
            let response: RawResponse = self.transport.send(request).await?;
            let status = response.status();

            tracing::debug!(
                method = %request.method(),
                path = %request.path(),
                status,
                "Kong admin API request"
            );

            let response = classify(response).await?;
            Ok::<_, HttpError>(response.into_body().await?)
        })
        .await
    }
}

// Verify KongClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<KongClient>();
};

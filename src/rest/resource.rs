//! The generic Kong resource service.
//!
//! A type implementing [`Resource`] declares its path table and how to read
//! its own path ids; it then gets `create`, `get`, `update`, `delete`, `list`
//! and `list_all` for free. Every method builds its request through
//! [`Request::builder`], so a blank id fails with
//! [`HttpError::InvalidInput`] before anything is sent.
//!
//! # Example
//!
//! ```rust,ignore
//! use kong_admin::clients::HttpMethod;
//! use kong_admin::rest::{PathIds, Resource, ResourceOperation, ResourcePath};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct Consumer {
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub id: Option<String>,
//!     pub username: Option<String>,
//! }
//!
//! impl Resource for Consumer {
//!     const NAME: &'static str = "Consumer";
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "/consumers"),
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::Get, &["id"], "/consumers/{id}"),
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::List, &[], "/consumers"),
//!     ];
//!
//!     fn path_ids(&self) -> PathIds {
//!         PathIds::new().with_opt("id", self.id.clone())
//!     }
//! }
//!
//! let consumer = Consumer::get(&client, &ctx, &PathIds::new().with("id", "bob")).await?;
//! ```

use serde::{de::DeserializeOwned, Serialize};

use crate::clients::{
    Context, HttpError, HttpMethod, KongClient, ListOpt, Page, Request, Transport,
};
use crate::rest::{build_path, get_path, PathIds, ResourceOperation, ResourcePath};

/// A Kong entity reachable through a static path table.
///
/// # Required Bounds
///
/// Resources must be serializable, deserializable, cloneable, and thread-safe.
#[allow(async_fn_in_trait)]
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// The entity name used in error messages (e.g. "FileResource").
    const NAME: &'static str;

    /// Every path the entity is reachable through.
    const PATHS: &'static [ResourcePath];

    /// Path ids carried by this value, used by `create` and `update`.
    fn path_ids(&self) -> PathIds;

    /// Resolves the method and path for `operation`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidInput`] when the operation is not supported
    /// or a required id is missing or blank.
    fn resolve(
        operation: ResourceOperation,
        ids: &PathIds,
    ) -> Result<(HttpMethod, String), HttpError> {
        let available = ids.available();
        if let Some(path) = get_path(Self::PATHS, operation, &available) {
            return Ok((path.http_method, build_path(path.template, ids)?));
        }

        // Report the first id the least demanding candidate is missing.
        let candidate = Self::PATHS
            .iter()
            .filter(|p| p.operation == operation)
            .min_by_key(|p| p.id_count())
            .ok_or_else(|| {
                HttpError::invalid_input(format!(
                    "{} does not support the {} operation",
                    Self::NAME,
                    operation.as_str()
                ))
            })?;
        let missing = candidate
            .ids
            .iter()
            .find(|id| !available.contains(*id))
            .copied()
            .unwrap_or_default();

        Err(HttpError::invalid_input(format!(
            "{missing} cannot be empty for {} {} operation",
            Self::NAME,
            operation.as_str()
        )))
    }

    /// Creates the entity and returns Kong's copy of it.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidInput`] when a required parent id is
    /// missing, and any error of [`KongClient::execute`].
    async fn create<T: Transport>(
        &self,
        client: &KongClient<T>,
        ctx: &Context,
    ) -> Result<Self, HttpError> {
        let (method, path) = Self::resolve(ResourceOperation::Create, &self.path_ids())?;
        let request = Request::builder(method, path).json(self).build()?;
        client.execute(ctx, &request).await
    }

    /// Fetches one entity.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidInput`] for a missing id, and any error of
    /// [`KongClient::execute`]. A missing entity is an
    /// [`ApiError`](crate::ApiError) with code 404.
    async fn get<T: Transport>(
        client: &KongClient<T>,
        ctx: &Context,
        ids: &PathIds,
    ) -> Result<Self, HttpError> {
        let (method, path) = Self::resolve(ResourceOperation::Get, ids)?;
        let request = Request::builder(method, path).build()?;
        client.execute(ctx, &request).await
    }

    /// Sends this value as a partial update and returns Kong's copy.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidInput`] when this value lacks its ids, and
    /// any error of [`KongClient::execute`].
    async fn update<T: Transport>(
        &self,
        client: &KongClient<T>,
        ctx: &Context,
    ) -> Result<Self, HttpError> {
        let (method, path) = Self::resolve(ResourceOperation::Update, &self.path_ids())?;
        let request = Request::builder(method, path).json(self).build()?;
        client.execute(ctx, &request).await
    }

    /// Deletes one entity.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidInput`] for a missing id, and any error of
    /// [`KongClient::execute_unit`].
    async fn delete<T: Transport>(
        client: &KongClient<T>,
        ctx: &Context,
        ids: &PathIds,
    ) -> Result<(), HttpError> {
        let (method, path) = Self::resolve(ResourceOperation::Delete, ids)?;
        let request = Request::builder(method, path).build()?;
        client.execute_unit(ctx, &request).await
    }

    /// Fetches one page. `ids` holds parent ids for nested collections.
    ///
    /// # Errors
    ///
    /// Same as [`KongClient::list_page`].
    async fn list<T: Transport>(
        client: &KongClient<T>,
        ctx: &Context,
        ids: &PathIds,
        opt: Option<&ListOpt>,
    ) -> Result<Page<Self>, HttpError> {
        let (_, path) = Self::resolve(ResourceOperation::List, ids)?;
        client.list_page(ctx, &path, opt).await
    }

    /// Fetches every entity of the collection.
    ///
    /// # Errors
    ///
    /// Same as [`KongClient::list_all`]: the first error and no items.
    async fn list_all<T: Transport>(
        client: &KongClient<T>,
        ctx: &Context,
        ids: &PathIds,
    ) -> Result<Vec<Self>, HttpError> {
        let (_, path) = Self::resolve(ResourceOperation::List, ids)?;
        client.list_all(ctx, &path).await
    }

    /// Like [`list_all`](Self::list_all), starting from custom options.
    ///
    /// # Errors
    ///
    /// Same as [`KongClient::list_all_with`].
    async fn list_all_with<T: Transport>(
        client: &KongClient<T>,
        ctx: &Context,
        ids: &PathIds,
        opt: ListOpt,
    ) -> Result<Vec<Self>, HttpError> {
        let (_, path) = Self::resolve(ResourceOperation::List, ids)?;
        client.list_all_with(ctx, &path, opt).await
    }
}

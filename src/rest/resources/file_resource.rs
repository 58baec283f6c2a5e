//! Workspace file resources (`/files`).
//!
//! Kong Enterprise stores workspace files such as API specs and portal
//! templates under `/files`. Besides the generic [`Resource`] operations,
//! a file can be looked up by its path with [`FileResource::get_by_path`].
//!
//! # Example
//!
//! ```rust,ignore
//! use kong_admin::rest::{PathIds, Resource};
//! use kong_admin::rest::resources::FileResource;
//!
//! let orders = FileResource {
//!     path: Some("specs/orders.yaml".to_string()),
//!     contents: Some("openapi: 3.0.0".to_string()),
//!     ..Default::default()
//! };
//! let created = orders.create(&client, &ctx).await?;
//!
//! let same = FileResource::get_by_path(&client, &ctx, "specs/orders.yaml").await?;
//! assert_eq!(created.id, same.id);
//! ```

use serde::{Deserialize, Serialize};

use crate::clients::{
    ApiError, Context, HttpError, HttpMethod, KongClient, Request, Transport,
};
use crate::rest::{is_blank, PathIds, Resource, ResourceOperation, ResourcePath};

/// A file stored in a Kong workspace.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FileResource {
    /// The unique identifier of the file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The file path, ending in a file extension (e.g. "specs/orders.yaml").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// The file contents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contents: Option<String>,

    /// Unix timestamp of creation.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created_at: Option<i64>,
}

impl Resource for FileResource {
    const NAME: &'static str = "FileResource";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "/files"),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Get,
            &["id"],
            "/files/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Patch,
            ResourceOperation::Update,
            &["id"],
            "/files/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "/files/{id}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::List, &[], "/files"),
    ];

    fn path_ids(&self) -> PathIds {
        PathIds::new().with_opt("id", self.id.clone())
    }
}

#[derive(Deserialize)]
struct FileList {
    #[serde(default)]
    data: Vec<FileResource>,
}

impl FileResource {
    /// Path ids addressing the file with the given id.
    #[must_use]
    pub fn ids(id: impl Into<String>) -> PathIds {
        PathIds::new().with("id", id)
    }

    /// Fetches the file stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidInput`] for a blank path, and an
    /// [`ApiError`] with code 404 and message "Not found" when no file has
    /// that path.
    pub async fn get_by_path<T: Transport>(
        client: &KongClient<T>,
        ctx: &Context,
        path: &str,
    ) -> Result<Self, HttpError> {
        if is_blank(Some(path)) {
            return Err(HttpError::invalid_input(
                "path cannot be empty for FileResource get operation",
            ));
        }

        let request = Request::builder(HttpMethod::Get, "/files")
            .query_param("path", path)
            .build()?;
        let list: FileList = client.execute(ctx, &request).await?;

        list.data
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::new(404, "Not found").into())
    }
}

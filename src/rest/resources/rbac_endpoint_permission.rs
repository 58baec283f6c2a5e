//! RBAC endpoint permissions (`/rbac/roles/{role}/endpoints`).
//!
//! A permission grants (or with `negative`, denies) a role some actions on
//! an endpoint of a workspace. It is addressed by role, workspace and
//! endpoint; the endpoint path is appended right after the workspace, so
//! `/services` in workspace `default` lives at
//! `/rbac/roles/{role}/endpoints/default/services`.
//!
//! The bare wildcard endpoint `*` is addressed as `/*`.
//!
//! # Example
//!
//! ```rust,ignore
//! use kong_admin::rest::Resource;
//! use kong_admin::rest::resources::{RbacEndpointPermission, RbacRole};
//!
//! let permission = RbacEndpointPermission {
//!     role: Some(RbacRole { id: Some(role_id.clone()), ..Default::default() }),
//!     workspace: Some("default".to_string()),
//!     endpoint: Some("*".to_string()),
//!     actions: vec!["read".to_string()],
//!     ..Default::default()
//! };
//! permission.create(&client, &ctx).await?;
//!
//! let all = RbacEndpointPermission::list_all_for_role(&client, &ctx, &role_id).await?;
//! ```

use serde::{Deserialize, Serialize};

use crate::clients::{Context, HttpError, HttpMethod, KongClient, Transport};
use crate::rest::{
    escape_wildcard_segment, PathIds, Resource, ResourceOperation, ResourcePath,
};
use crate::rest::resources::RbacRole;

/// An endpoint permission of an RBAC role.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RbacEndpointPermission {
    /// Unix timestamp of creation.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created_at: Option<i64>,

    /// Workspace the endpoint belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace: Option<String>,

    /// The endpoint, e.g. "/services" or "*".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Allowed actions: "read", "create", "update", "delete".
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<String>,

    /// Whether the permission denies instead of grants.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative: Option<bool>,

    /// The owning role. Only its id is used, and only in the path; it is
    /// never sent in request bodies.
    #[serde(skip_serializing)]
    pub role: Option<RbacRole>,

    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Resource for RbacEndpointPermission {
    const NAME: &'static str = "RbacEndpointPermission";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &["role"],
            "/rbac/roles/{role}/endpoints",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Get,
            &["role", "workspace", "endpoint"],
            "/rbac/roles/{role}/endpoints/{workspace}{endpoint}",
        ),
        ResourcePath::new(
            HttpMethod::Patch,
            ResourceOperation::Update,
            &["role", "workspace", "endpoint"],
            "/rbac/roles/{role}/endpoints/{workspace}{endpoint}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["role", "workspace", "endpoint"],
            "/rbac/roles/{role}/endpoints/{workspace}{endpoint}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::List,
            &["role"],
            "/rbac/roles/{role}/endpoints",
        ),
    ];

    fn path_ids(&self) -> PathIds {
        PathIds::new()
            .with_opt(
                "role",
                self.role.as_ref().and_then(|role| role.id.clone()),
            )
            .with_opt("workspace", self.workspace.clone())
            .with_opt(
                "endpoint",
                self.endpoint.as_deref().map(escape_wildcard_segment),
            )
    }
}

impl RbacEndpointPermission {
    /// Path ids addressing one permission. `endpoint` is escaped.
    #[must_use]
    pub fn ids(role: &str, workspace: &str, endpoint: &str) -> PathIds {
        PathIds::new()
            .with("role", role)
            .with("workspace", workspace)
            .with("endpoint", escape_wildcard_segment(endpoint))
    }

    /// Fetches every endpoint permission of a role.
    ///
    /// # Errors
    ///
    /// Same as [`Resource::list_all`].
    pub async fn list_all_for_role<T: Transport>(
        client: &KongClient<T>,
        ctx: &Context,
        role_name_or_id: &str,
    ) -> Result<Vec<Self>, HttpError> {
        Self::list_all(client, ctx, &PathIds::new().with("role", role_name_or_id)).await
    }
}

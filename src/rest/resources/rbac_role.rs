//! RBAC roles (`/rbac/roles`).

use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::{PathIds, Resource, ResourceOperation, ResourcePath};

/// An RBAC role.
///
/// Roles are addressed by id or by name; [`RbacRole::ids`] accepts either.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RbacRole {
    /// The unique identifier of the role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The role name, unique per workspace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// Unix timestamp of creation.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created_at: Option<i64>,

    /// Whether Kong created the role for a single admin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}

impl Resource for RbacRole {
    const NAME: &'static str = "RbacRole";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "/rbac/roles",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Get,
            &["id"],
            "/rbac/roles/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Patch,
            ResourceOperation::Update,
            &["id"],
            "/rbac/roles/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "/rbac/roles/{id}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::List, &[], "/rbac/roles"),
    ];

    fn path_ids(&self) -> PathIds {
        PathIds::new().with_opt("id", self.id.clone().or_else(|| self.name.clone()))
    }
}

impl RbacRole {
    /// Path ids addressing the role with the given id or name.
    #[must_use]
    pub fn ids(name_or_id: impl Into<String>) -> PathIds {
        PathIds::new().with("id", name_or_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_falls_back_to_name() {
        let role = RbacRole {
            name: Some("auditor".to_string()),
            ..Default::default()
        };

        let (method, path) = RbacRole::resolve(ResourceOperation::Update, &role.path_ids()).unwrap();
        assert_eq!(method, HttpMethod::Patch);
        assert_eq!(path, "/rbac/roles/auditor");
    }

    #[test]
    fn test_role_without_id_or_name_cannot_be_updated() {
        let role = RbacRole::default();
        assert!(RbacRole::resolve(ResourceOperation::Update, &role.path_ids()).is_err());
    }

    #[test]
    fn test_role_deserialization() {
        let role: RbacRole = serde_json::from_str(
            r#"{"id": "r1", "name": "admin", "comment": null, "created_at": 1, "is_default": false}"#,
        )
        .unwrap();

        assert_eq!(role.name.as_deref(), Some("admin"));
        assert_eq!(role.is_default, Some(false));
        assert!(role.comment.is_none());
    }
}

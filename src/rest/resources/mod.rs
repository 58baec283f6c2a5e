//! Kong Admin API resources.
//!
//! Each resource implements [`Resource`](crate::rest::Resource) and gets the
//! generic CRUD and list operations from it:
//!
//! - [`FileResource`]: workspace files, plus lookup by path
//! - [`RbacRole`]: RBAC roles
//! - [`RbacEndpointPermission`]: endpoint permissions of a role
//!
//! ```rust,ignore
//! use kong_admin::rest::Resource;
//! use kong_admin::rest::resources::RbacRole;
//!
//! let role = RbacRole::get(&client, &ctx, &RbacRole::ids("auditor")).await?;
//! RbacRole::delete(&client, &ctx, &RbacRole::ids("auditor")).await?;
//! ```

mod file_resource;
mod rbac_endpoint_permission;
mod rbac_role;

pub use file_resource::FileResource;
pub use rbac_endpoint_permission::RbacEndpointPermission;
pub use rbac_role::RbacRole;

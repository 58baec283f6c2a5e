//! Resource layer for the Kong Admin API.
//!
//! - **[`Resource`] trait**: generic `create`, `get`, `update`, `delete`,
//!   `list` and `list_all` driven by a static path table
//! - **Path building**: [`ResourcePath`], [`get_path`], [`build_path`], and
//!   [`PathIds`] for the ids a path needs
//! - **Helpers**: [`is_blank`] and [`escape_wildcard_segment`]
//! - **[`resources`]**: the concrete Kong entities
//!
//! # Example
//!
//! ```rust,ignore
//! use kong_admin::clients::{Context, ListOpt};
//! use kong_admin::rest::{PathIds, Resource};
//! use kong_admin::rest::resources::FileResource;
//!
//! let ctx = Context::background();
//!
//! let page = FileResource::list(&client, &ctx, &PathIds::new(), Some(&ListOpt::new(50))).await?;
//! if let Some(next) = page.next {
//!     let more = FileResource::list(&client, &ctx, &PathIds::new(), Some(&next)).await?;
//! }
//!
//! let file = FileResource::get(&client, &ctx, &FileResource::ids("4d0c")).await?;
//! ```

mod path;
mod resource;

pub mod resources;

pub use path::{
    build_path, escape_wildcard_segment, get_path, is_blank, PathIds, ResourceOperation,
    ResourcePath,
};
pub use resource::Resource;

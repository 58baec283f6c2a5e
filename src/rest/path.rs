//! Path tables and path interpolation for Kong resources.
//!
//! A resource declares every path it can be reached through as a
//! [`ResourcePath`]. For an operation, [`get_path`] selects the most specific
//! path whose ids are all available, and [`build_path`] fills in the
//! `{placeholder}` segments.
//!
//! Endpoint permissions, for example, are addressed by role, workspace and
//! endpoint:
//!
//! ```rust
//! use kong_admin::clients::HttpMethod;
//! use kong_admin::rest::{build_path, get_path, PathIds, ResourceOperation, ResourcePath};
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(
//!         HttpMethod::Get,
//!         ResourceOperation::Get,
//!         &["role", "workspace", "endpoint"],
//!         "/rbac/roles/{role}/endpoints/{workspace}{endpoint}",
//!     ),
//!     ResourcePath::new(
//!         HttpMethod::Get,
//!         ResourceOperation::List,
//!         &["role"],
//!         "/rbac/roles/{role}/endpoints",
//!     ),
//! ];
//!
//! let ids = PathIds::new()
//!     .with("role", "auditor")
//!     .with("workspace", "default")
//!     .with("endpoint", "/services");
//!
//! let path = get_path(PATHS, ResourceOperation::Get, &ids.available()).unwrap();
//! let url = build_path(path.template, &ids).unwrap();
//! assert_eq!(url, "/rbac/roles/auditor/endpoints/default/services");
//! ```

use crate::clients::{HttpError, HttpMethod};

/// Operations a resource can support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Fetch one entity (GET).
    Get,
    /// Fetch a page of entities (GET).
    List,
    /// Create an entity (POST).
    Create,
    /// Partially update an entity (PATCH).
    Update,
    /// Delete an entity (DELETE).
    Delete,
}

impl ResourceOperation {
    /// Returns the HTTP method Kong uses for this operation.
    #[must_use]
    pub const fn default_http_method(&self) -> HttpMethod {
        match self {
            Self::Get | Self::List => HttpMethod::Get,
            Self::Create => HttpMethod::Post,
            Self::Update => HttpMethod::Patch,
            Self::Delete => HttpMethod::Delete,
        }
    }

    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::List => "list",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// How to reach a resource for one operation.
///
/// Templates use `{name}` placeholders. Every name listed in `ids` must
/// appear in the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method for this path.
    pub http_method: HttpMethod,
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// Ids required by the template, in order.
    pub ids: &'static [&'static str],
    /// The path template, relative to the admin API root.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            ids,
            template,
        }
    }

    /// Returns the number of required ids.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Checks if all required ids are available.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Named path ids, such as `role` or `id`.
///
/// Setting a name twice keeps the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathIds {
    ids: Vec<(&'static str, String)>,
}

impl PathIds {
    /// Creates an empty set of ids.
    #[must_use]
    pub const fn new() -> Self {
        Self { ids: Vec::new() }
    }

    /// Sets `name` to `value`.
    #[must_use]
    pub fn with(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets `name` to `value` when there is a value.
    #[must_use]
    pub fn with_opt<V: Into<String>>(mut self, name: &'static str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.insert(name, value);
        }
        self
    }

    /// Sets `name` to `value`.
    pub fn insert(&mut self, name: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.ids.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.ids.push((name, value)),
        }
    }

    /// Returns the value of `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.ids
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Names whose value is not blank.
    #[must_use]
    pub fn available(&self) -> Vec<&'static str> {
        self.ids
            .iter()
            .filter(|(_, v)| !is_blank(Some(v.as_str())))
            .map(|(n, _)| *n)
            .collect()
    }
}

/// Returns `true` when `value` is absent, empty, or only whitespace.
#[must_use]
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Escapes the endpoint wildcard for use in a path.
///
/// Kong addresses the `*` endpoint as `/*`. Every other value is returned
/// unchanged.
///
/// ```rust
/// use kong_admin::rest::escape_wildcard_segment;
///
/// assert_eq!(escape_wildcard_segment("*"), "/*");
/// assert_eq!(escape_wildcard_segment("/services"), "/services");
/// assert_eq!(escape_wildcard_segment("/services/*"), "/services/*");
/// ```
#[must_use]
pub fn escape_wildcard_segment(segment: &str) -> &str {
    if segment == "*" {
        "/*"
    } else {
        segment
    }
}

/// Selects the best matching path for an operation.
///
/// Among the paths for `operation` whose ids are all available, the one
/// with the most ids wins.
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.id_count())
}

/// Fills every `{name}` placeholder of `template` from `ids`.
///
/// Values are inserted verbatim.
///
/// # Errors
///
/// Returns [`HttpError::InvalidInput`] when a placeholder has no value or a
/// blank one.
///
/// ```rust
/// use kong_admin::rest::{build_path, PathIds};
///
/// let ids = PathIds::new().with("id", "4d0c");
/// assert_eq!(build_path("/files/{id}", &ids).unwrap(), "/files/4d0c");
///
/// assert!(build_path("/files/{id}", &PathIds::new()).is_err());
/// ```
pub fn build_path(template: &str, ids: &PathIds) -> Result<String, HttpError> {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let name = &rest[start + 1..start + len];
        let value = ids.get(name);
        if is_blank(value) {
            return Err(HttpError::invalid_input(format!("{name} cannot be empty")));
        }

        result.push_str(&rest[..start]);
        result.push_str(value.unwrap_or_default());
        rest = &rest[start + len + 1..];
    }
    result.push_str(rest);

    Ok(result)
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
    assert_send_sync::<PathIds>();
};

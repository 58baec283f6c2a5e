//! Cursor-based pagination over Kong list endpoints.
//!
//! Kong list endpoints answer with `{"data": [...], "next": ..., "offset": ...}`.
//! A non-empty `offset` means another page exists; it is echoed back as the
//! `offset` query parameter of the next request.
//!
//! - [`KongClient::list_page`] fetches one page.
//! - [`KongClient::list_all`] follows the cursor to the end and returns every
//!   item, or the first error and nothing else.
//! - [`KongClient::paginate`] returns a [`Paginator`] that fetches one page
//!   per call.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::clients::context::Context;
use crate::clients::errors::HttpError;
use crate::clients::http_client::KongClient;
use crate::clients::http_request::{HttpMethod, Request};
use crate::clients::transport::Transport;

/// Page size used by [`KongClient::list_all`].
pub const DEFAULT_PAGE_SIZE: u32 = 1000;

/// Options for a single list request.
///
/// # Example
///
/// ```rust
/// use kong_admin::clients::ListOpt;
///
/// let opt = ListOpt::new(100).with_tags(["prod", "edge"]).match_all_tags(true);
/// assert_eq!(opt.size(), 100);
/// assert!(opt.offset().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListOpt {
    size: u32,
    offset: Option<String>,
    tags: Vec<String>,
    match_all_tags: bool,
}

impl Default for ListOpt {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ListOpt {
    /// Creates options for pages of `size` items, starting at the first page.
    #[must_use]
    pub const fn new(size: u32) -> Self {
        Self {
            size,
            offset: None,
            tags: Vec::new(),
            match_all_tags: false,
        }
    }

    /// Filters results by tags.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Requires every tag to match instead of any.
    #[must_use]
    pub const fn match_all_tags(mut self, match_all: bool) -> Self {
        self.match_all_tags = match_all;
        self
    }

    /// Starts from the given cursor.
    #[must_use]
    pub fn with_offset(mut self, offset: impl Into<String>) -> Self {
        let offset = offset.into();
        self.offset = (!offset.is_empty()).then_some(offset);
        self
    }

    /// Maximum number of items per page.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Cursor returned by the previous page, if any.
    #[must_use]
    pub fn offset(&self) -> Option<&str> {
        self.offset.as_deref()
    }

    /// Tag filter.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Whether all tags must match.
    #[must_use]
    pub const fn is_match_all_tags(&self) -> bool {
        self.match_all_tags
    }

    /// Tags in Kong's filter syntax: `,` joins for match-all, `/` for match-any.
    fn tags_param(&self) -> String {
        let separator = if self.match_all_tags { "," } else { "/" };
        self.tags.join(separator)
    }
}

/// One page of a list response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page<D> {
    /// Items of this page, in server order.
    pub items: Vec<D>,
    /// Options for the next page; `None` on the last page.
    pub next: Option<ListOpt>,
}

#[derive(Deserialize)]
struct PageBody<D> {
    #[serde(default = "Vec::new")]
    data: Vec<D>,
    #[serde(default)]
    offset: Option<String>,
}

/// Where a [`Paginator`] stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageState {
    /// No page has been requested yet.
    Fetching,
    /// At least one more page exists.
    HasMore,
    /// The last page has been returned.
    Done,
    /// A page request failed. No further requests are made.
    Failed,
}

impl<T: Transport> KongClient<T> {
    /// Fetches one page from `base_path`.
    ///
    /// With `opt = None` a page of [`DEFAULT_PAGE_SIZE`] items is requested.
    /// `opt` is never modified; the returned page carries the options for the
    /// next request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidInput`] for an empty path or a zero page
    /// size, and any error of [`execute`](Self::execute).
    pub async fn list_page<D: DeserializeOwned>(
        &self,
        ctx: &Context,
        base_path: &str,
        opt: Option<&ListOpt>,
    ) -> Result<Page<D>, HttpError> {
        let opt = opt.cloned().unwrap_or_default();
        if opt.size == 0 {
            return Err(HttpError::invalid_input("page size must be greater than 0"));
        }

        let request = Request::builder(HttpMethod::Get, base_path)
            .query_param("size", opt.size.to_string())
            .query_param("offset", opt.offset.clone().unwrap_or_default())
            .query_param("tags", opt.tags_param())
            .build()?;

        let body: PageBody<D> = self.execute(ctx, &request).await?;

        tracing::debug!(
            path = %base_path,
            items = body.data.len(),
            has_more = body.offset.as_deref().is_some_and(|o| !o.is_empty()),
            "fetched list page"
        );

        let next = body
            .offset
            .filter(|offset| !offset.is_empty())
            .map(|offset| ListOpt {
                offset: Some(offset),
                ..opt
            });

        Ok(Page {
            items: body.data,
            next,
        })
    }

    /// Fetches every item under `base_path`, [`DEFAULT_PAGE_SIZE`] at a time.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered. Items from earlier pages are
    /// discarded.
    pub async fn list_all<D: DeserializeOwned>(
        &self,
        ctx: &Context,
        base_path: &str,
    ) -> Result<Vec<D>, HttpError> {
        self.list_all_with(ctx, base_path, ListOpt::default()).await
    }

    /// Like [`list_all`](Self::list_all), starting from custom options.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered. Items from earlier pages are
    /// discarded.
    pub async fn list_all_with<D: DeserializeOwned>(
        &self,
        ctx: &Context,
        base_path: &str,
        opt: ListOpt,
    ) -> Result<Vec<D>, HttpError> {
        let mut paginator = self.paginate::<D>(base_path, opt);
        let mut all = Vec::new();
        while let Some(page) = paginator.next_page(ctx).await {
            all.extend(page?);
        }
        Ok(all)
    }

    /// Returns a [`Paginator`] over `base_path` starting from `opt`.
    #[must_use]
    pub fn paginate<D: DeserializeOwned>(
        &self,
        base_path: &str,
        opt: ListOpt,
    ) -> Paginator<'_, T, D> {
        Paginator {
            client: self,
            base_path: base_path.to_string(),
            next: Some(opt),
            state: PageState::Fetching,
            _marker: std::marker::PhantomData,
        }
    }
}

/// Fetches a list one page at a time.
///
/// # Example
///
/// ```rust,ignore
/// let mut pages = client.paginate::<RbacRole>("/rbac/roles", ListOpt::new(100));
/// while let Some(roles) = pages.next_page(&ctx).await {
///     for role in roles? {
///         println!("{}", role.name);
///     }
/// }
/// ```
#[derive(Debug)]
pub struct Paginator<'a, T, D> {
    client: &'a KongClient<T>,
    base_path: String,
    next: Option<ListOpt>,
    state: PageState,
    _marker: std::marker::PhantomData<fn() -> D>,
}

impl<T: Transport, D: DeserializeOwned> Paginator<'_, T, D> {
    /// Current state.
    #[must_use]
    pub const fn state(&self) -> PageState {
        self.state
    }

    /// Fetches the next page.
    ///
    /// Returns `Some(Ok(items))` per page, `Some(Err(_))` once when a request
    /// fails, then `None` forever.
    pub async fn next_page(&mut self, ctx: &Context) -> Option<Result<Vec<D>, HttpError>> {
        if matches!(self.state, PageState::Done | PageState::Failed) {
            return None;
        }
        let opt = self.next.take()?;

        if let Err(e) = ctx.check() {
            tracing::warn!(path = %self.base_path, error = %e, "list aborted");
            self.state = PageState::Failed;
            return Some(Err(e));
        }

        match self
            .client
            .list_page::<D>(ctx, &self.base_path, Some(&opt))
            .await
        {
            Ok(page) => {
                self.state = if page.next.is_some() {
                    PageState::HasMore
                } else {
                    PageState::Done
                };
                self.next = page.next;
                Some(Ok(page.items))
            }
            Err(e) => {
                if e.is_cancellation() {
                    tracing::warn!(path = %self.base_path, error = %e, "list aborted");
                }
                self.state = PageState::Failed;
                Some(Err(e))
            }
        }
    }
}

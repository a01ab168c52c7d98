//! The page-fetching seam between the list state machine and the network.

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::Page;
use crate::error::Error;

/// Anything that can serve one page of artworks.
///
/// [`ArticClient`](crate::ArticClient) is the production implementation.
/// Tests substitute an in-memory collection.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use artic_lib::api::{Page, PageSource, Pagination};
/// use artic_lib::error::Error;
///
/// struct Empty;
///
/// #[async_trait]
/// impl PageSource for Empty {
///     async fn fetch_page(&self, _page: u32, _limit: u32) -> Result<Page, Error> {
///         Ok(Page::new(Vec::new(), Pagination::with_total(0)))
///     }
/// }
/// ```
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetches page `page` (1-based) holding at most `limit` records.
    async fn fetch_page(&self, page: u32, limit: u32) -> Result<Page, Error>;
}

#[async_trait]
impl<S: PageSource + ?Sized> PageSource for Arc<S> {
    async fn fetch_page(&self, page: u32, limit: u32) -> Result<Page, Error> {
        (**self).fetch_page(page, limit).await
    }
}

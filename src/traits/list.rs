//! Paged listing of entity collections.

use async_trait::async_trait;

use crate::client::TonicPowClient;
use crate::error::Result;
use crate::pagination::{Page, PaginationParams};

/// Page size used by [`List::list_all`].
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Upper bound on pages walked by [`List::list_all`].
const MAX_PAGES: u32 = 1000;

/// Entities served by a paged list endpoint.
///
/// ```ignore
/// use tonicpow::{Campaign, List, TonicPowClient};
///
/// let client = TonicPowClient::from_env()?;
/// let second = Campaign::list_page(&client, &Default::default(), 2, 10).await?;
/// let everything = Campaign::list_all(&client, &Default::default()).await?;
/// ```
#[async_trait]
pub trait List: Sized + Send {
    /// Sorting and filtering applied on top of paging.
    type Query: Default + Send + Sync;

    /// Fetch one page. `page` is 1-indexed.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    async fn list_page(
        client: &TonicPowClient,
        query: &Self::Query,
        page: u32,
        count: u32,
    ) -> Result<Page<Self>>;

    /// Walk every page in [`DEFAULT_PAGE_SIZE`] steps and collect the items.
    ///
    /// # Errors
    ///
    /// Returns the first page error encountered.
    async fn list_all(client: &TonicPowClient, query: &Self::Query) -> Result<Vec<Self>> {
        let mut items = Vec::new();
        let mut params = PaginationParams::for_page(1, DEFAULT_PAGE_SIZE);

        loop {
            let page =
                Self::list_page(client, query, params.current_page, params.results_per_page)
                    .await?;
            let next = page.next_page();
            items.extend(page);

            match next {
                Some(next) if next.current_page <= MAX_PAGES => params = next,
                Some(_) => {
                    tracing::warn!(max_pages = MAX_PAGES, "Stopped listing at page limit");
                    break;
                }
                None => break,
            }
        }

        Ok(items)
    }
}

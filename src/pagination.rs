//! Paging for TonicPow list endpoints.
//!
//! The API pages with `current_page` and `results_per_page` query
//! parameters and reports the overall count as `results`.

use serde::Serialize;

/// Paging parameters as the API names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    /// Page number (1-indexed).
    pub current_page: u32,
    /// Number of items per page.
    pub results_per_page: u32,
}

impl PaginationParams {
    /// Parameters for a specific page. Zero values are raised to one.
    #[must_use]
    pub fn for_page(current_page: u32, results_per_page: u32) -> Self {
        Self {
            current_page: current_page.max(1),
            results_per_page: results_per_page.max(1),
        }
    }

    /// The parameters for the page after this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self {
            current_page: self.current_page + 1,
            ..self
        }
    }

    /// Render as query string pairs, without a leading `?`.
    #[must_use]
    pub fn to_query(&self) -> String {
        format!(
            "current_page={}&results_per_page={}",
            self.current_page, self.results_per_page
        )
    }
}

/// One page of a list endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(bound = "T: Serialize")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub current_page: u32,
    pub results_per_page: u32,
    /// Total number of results across all pages, when the API reports it.
    pub results: Option<u64>,
}

impl<T> Page<T> {
    #[must_use]
    pub fn new(items: Vec<T>, params: PaginationParams, results: Option<u64>) -> Self {
        Self {
            items,
            current_page: params.current_page,
            results_per_page: params.results_per_page,
            results,
        }
    }

    /// Whether another page should exist after this one.
    ///
    /// Without a reported total, a full page is taken to mean there is more.
    #[must_use]
    pub fn has_more(&self) -> bool {
        match self.results {
            Some(results) => {
                u64::from(self.current_page) * u64::from(self.results_per_page) < results
            }
            None => self.items.len() >= self.results_per_page as usize,
        }
    }

    /// Parameters for fetching the following page, if there is one.
    #[must_use]
    pub fn next_page(&self) -> Option<PaginationParams> {
        self.has_more().then(|| {
            PaginationParams::for_page(self.current_page, self.results_per_page).next()
        })
    }

    /// Number of pages implied by `results`, if known.
    #[must_use]
    pub fn total_pages(&self) -> Option<u64> {
        self.results
            .map(|results| results.div_ceil(u64::from(self.results_per_page.max(1))))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reported_total_drives_has_more() {
        let first: Page<i32> =
            Page::new(vec![1; 25], PaginationParams::for_page(1, 25), Some(60));
        assert!(first.has_more());
        assert_eq!(first.total_pages(), Some(3));
        assert_eq!(first.next_page(), Some(PaginationParams::for_page(2, 25)));

        let last: Page<i32> =
            Page::new(vec![1; 10], PaginationParams::for_page(3, 25), Some(60));
        assert!(!last.has_more());
        assert_eq!(last.next_page(), None);
    }

    #[test]
    fn test_full_page_without_total_has_more() {
        let full: Page<i32> = Page::new(vec![1; 25], PaginationParams::for_page(1, 25), None);
        assert!(full.has_more());
        assert_eq!(full.total_pages(), None);

        let short: Page<i32> = Page::new(vec![1; 5], PaginationParams::for_page(1, 25), None);
        assert!(!short.has_more());
    }

    #[test]
    fn test_pagination_query() {
        let params = PaginationParams::for_page(2, 10);
        assert_eq!(params.to_query(), "current_page=2&results_per_page=10");
        assert_eq!(
            PaginationParams::for_page(0, 0).to_query(),
            "current_page=1&results_per_page=1"
        );
    }
}

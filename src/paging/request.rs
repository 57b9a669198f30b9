use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// What the presentation layer wants to see: a search query plus a 1-based
/// page of a given size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewRequest {
    query: String,
    page: usize,
    page_size: usize,
}

impl Default for ViewRequest {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ViewRequest {
    /// Pages and page sizes below 1 are raised to 1.
    pub fn new(query: impl Into<String>, page: usize, page_size: usize) -> Self {
        Self {
            query: query.into(),
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn with_query(&self, query: impl Into<String>) -> Self {
        Self::new(query, 1, self.page_size)
    }

    pub fn with_page(&self, page: usize) -> Self {
        Self::new(self.query.clone(), page, self.page_size)
    }

    /// Changing the page size restarts at page 1.
    pub fn with_page_size(&self, page_size: usize) -> Self {
        Self::new(self.query.clone(), 1, page_size)
    }

    /// Same request with the page pulled back onto `[1, page_count]`.
    pub fn clamped_to(&self, page_count: usize) -> Self {
        self.with_page(self.page.min(page_count.max(1)))
    }
}

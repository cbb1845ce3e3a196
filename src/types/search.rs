use serde::{Deserialize, Serialize};

/// A single synthetic search result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub url: String,
    pub snippet: String,
    pub domain: String,
}

/// 1-based pagination state for the results page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub current_page: usize,
    pub page_size: usize,
}

impl PageState {
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size,
        }
    }

    /// Back to page 1, keeping the page size.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }
}

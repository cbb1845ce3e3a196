//! View Selector for the search flow.
//!
//! A small state machine over the four mutually exclusive display states,
//! owning the 1-based pagination state. Previews are entered from the
//! result list only and close back to it; a new query always lands on
//! page 1 of a fresh list.

use crate::types::search::PageState;
use crate::types::view::ViewState;

/// Trait defining view selection operations.
pub trait ViewManagerTrait {
    fn submit_query(&mut self, query: &str);
    fn open_result(&mut self, url: &str);
    fn open_page_previews(&mut self, urls: Vec<String>);
    fn close_preview(&mut self);
    fn go_home(&mut self);
    fn set_page(&mut self, page: usize, total_pages: usize);
    fn view(&self) -> &ViewState;
    fn query(&self) -> &str;
    fn current_page(&self) -> usize;
}

/// View state machine for the search page.
pub struct ViewManager {
    view: ViewState,
    query: String,
    page: PageState,
}

impl ViewManager {
    pub fn new(page_size: usize) -> Self {
        Self {
            view: ViewState::Home,
            query: String::new(),
            page: PageState::new(page_size),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page.page_size
    }
}

impl ViewManagerTrait for ViewManager {
    /// A new query clears any open preview, resets pagination to page 1,
    /// and shows the result list.
    fn submit_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.page.reset();
        self.view = ViewState::ResultList;
    }

    /// Opens a single result preview. Only reachable from the result list;
    /// any other state ignores the request.
    fn open_result(&mut self, url: &str) {
        if self.view == ViewState::ResultList {
            self.view = ViewState::SinglePreview(url.to_string());
        }
    }

    /// Opens the current page's results as a preview grid, in page order.
    /// Only reachable from the result list; an empty URL list is ignored.
    fn open_page_previews(&mut self, urls: Vec<String>) {
        if self.view == ViewState::ResultList && !urls.is_empty() {
            self.view = ViewState::MultiPreview(urls);
        }
    }

    /// Closes either preview back to the result list.
    fn close_preview(&mut self) {
        match self.view {
            ViewState::SinglePreview(_) | ViewState::MultiPreview(_) => {
                self.view = ViewState::ResultList;
            }
            _ => {}
        }
    }

    /// Back to the home view with a blank query and reset pagination.
    fn go_home(&mut self) {
        self.view = ViewState::Home;
        self.query.clear();
        self.page.reset();
    }

    /// Moves to the given page, clamped into `[1, total_pages]`.
    fn set_page(&mut self, page: usize, total_pages: usize) {
        self.page.current_page = page.clamp(1, total_pages.max(1));
    }

    fn view(&self) -> &ViewState {
        &self.view
    }

    fn query(&self) -> &str {
        &self.query
    }

    fn current_page(&self) -> usize {
        self.page.current_page
    }
}

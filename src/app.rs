//! App Core for SKZ Browser.
//!
//! Central struct holding the store, managers, and capabilities, and
//! driving the navigation flow between them. There are no module-level
//! singletons; everything the shell mutates hangs off this struct.

use std::sync::Arc;

use crate::managers::bookmark_manager::BookmarkManager;
use crate::managers::download_manager::DownloadManager;
use crate::managers::history_manager::{HistoryManager, HistoryManagerTrait};
use crate::managers::tab_manager::{TabManager, TabManagerTrait, NEW_TAB_TITLE};
use crate::managers::view_manager::{ViewManager, ViewManagerTrait};
use crate::services::embedder::{DiscardingEmbedder, PageEmbedder};
use crate::services::result_pager;
use crate::services::search_provider::{SearchProvider, SyntheticSearchProvider};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::storage::LocalStore;
use crate::types::embed::EmbedPermissions;
use crate::types::errors::{SettingsError, StoreError};
use crate::types::route::{AddressKind, Route, SettingsSection};
use crate::types::search::SearchResult;
use crate::types::tab::TabPatch;
use crate::types::view::ViewState;

/// Central application struct owning every manager and capability.
pub struct App {
    pub store: Arc<LocalStore>,
    pub tab_manager: TabManager,
    pub bookmark_manager: BookmarkManager,
    pub history_manager: HistoryManager,
    pub download_manager: DownloadManager,
    pub settings_engine: SettingsEngine,
    pub view_manager: ViewManager,
    search_provider: Box<dyn SearchProvider>,
    embedder: Box<dyn PageEmbedder>,
    embed_permissions: EmbedPermissions,
    results: Vec<SearchResult>,
    route: Route,
}

impl App {
    /// Opens (or creates) the store at `path` and wires every component
    /// with the default synthetic provider and a discarding embedder.
    pub fn new(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let store = Arc::new(LocalStore::open(path)?);
        Self::with_parts(
            store,
            Box::new(SyntheticSearchProvider::new()),
            Box::new(DiscardingEmbedder),
        )
    }

    /// In-memory variant for tests and the demo binary.
    pub fn new_in_memory() -> Result<Self, Box<dyn std::error::Error>> {
        let store = Arc::new(LocalStore::open_in_memory()?);
        Self::with_parts(
            store,
            Box::new(SyntheticSearchProvider::new()),
            Box::new(DiscardingEmbedder),
        )
    }

    /// Full wiring with an injected store, search provider, and embedder.
    pub fn with_parts(
        store: Arc<LocalStore>,
        search_provider: Box<dyn SearchProvider>,
        embedder: Box<dyn PageEmbedder>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let tab_manager = TabManager::new();
        let bookmark_manager = BookmarkManager::new(store.clone())?;
        let mut history_manager = HistoryManager::new(store.clone())?;
        let download_manager = DownloadManager::new();

        let mut settings_engine = SettingsEngine::new(store.clone());
        settings_engine.load()?;
        history_manager.set_recording_enabled(settings_engine.preferences().privacy.save_history);

        let view_manager = ViewManager::new(result_pager::PAGE_SIZE);

        Ok(Self {
            store,
            tab_manager,
            bookmark_manager,
            history_manager,
            download_manager,
            settings_engine,
            view_manager,
            search_provider,
            embedder,
            embed_permissions: EmbedPermissions::default(),
            results: Vec::new(),
            route: Route::Home,
        })
    }

    /// Classifies raw address-bar input: an absolute URL with an explicit
    /// scheme is navigated to directly, anything else is a search query,
    /// and blank input is not navigated at all.
    pub fn classify_address(input: &str) -> AddressKind {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            AddressKind::Empty
        } else if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            AddressKind::Url(trimmed.to_string())
        } else {
            AddressKind::Query(trimmed.to_string())
        }
    }

    /// Handles a submission from the address bar.
    ///
    /// An absolute URL opens as an independent top-level context and lands
    /// on the active tab; anything else is routed through the search
    /// results page. Either way a single history entry is recorded with
    /// the raw input as both url and title. Empty input is ignored.
    pub fn submit_address(&mut self, input: &str) -> Result<(), StoreError> {
        let text = match Self::classify_address(input) {
            AddressKind::Empty => return Ok(()),
            AddressKind::Url(url) => {
                self.embedder.open_external(&url);
                self.tab_manager.update_active(TabPatch {
                    url: Some(url.clone()),
                    title: Some(url.clone()),
                });
                url
            }
            AddressKind::Query(query) => {
                self.run_search(&query);
                query
            }
        };
        self.history_manager.record(&text, &text)?;
        Ok(())
    }

    /// Submits a query from the results-page search box. Blank queries are
    /// ignored.
    pub fn submit_search(&mut self, query: &str) -> Result<(), StoreError> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Ok(());
        }
        self.run_search(trimmed);
        self.history_manager.record(trimmed, trimmed)?;
        Ok(())
    }

    /// Regenerates the result set and resets the view to page 1 of the list.
    fn run_search(&mut self, query: &str) {
        self.results = self.search_provider.search(query);
        self.view_manager.submit_query(query);
        self.route = Route::Search {
            query: query.to_string(),
            page: 1,
        };
    }

    /// The slice of results for the current page.
    pub fn current_page_results(&self) -> &[SearchResult] {
        result_pager::paginate(
            &self.results,
            self.view_manager.current_page(),
            self.view_manager.page_size(),
        )
    }

    /// Page numbers for the pagination control.
    pub fn page_numbers(&self) -> Vec<usize> {
        result_pager::visible_page_window(
            self.view_manager.current_page(),
            self.total_pages(),
            result_pager::PAGE_WINDOW,
        )
    }

    /// Total pages for the current result set.
    pub fn total_pages(&self) -> usize {
        result_pager::total_pages(self.results.len(), self.view_manager.page_size())
    }

    /// Moves to another results page, clamped into `[1, total_pages]`.
    pub fn change_page(&mut self, page: usize) {
        let total = self.total_pages();
        self.view_manager.set_page(page, total);
        if let Route::Search { query, .. } = &self.route {
            let query = query.clone();
            self.route = Route::Search {
                query,
                page: self.view_manager.current_page(),
            };
        }
    }

    /// Opens one result of the current page in an inline preview.
    /// `index` is the 0-based position within the page; out-of-range
    /// indices are ignored.
    pub fn open_result(&mut self, index: usize) {
        let url = match self.current_page_results().get(index) {
            Some(result) => result.url.clone(),
            None => return,
        };
        self.view_manager.open_result(&url);
        if matches!(self.view_manager.view(), ViewState::SinglePreview(_)) {
            self.embedder.embed(&url, &self.embed_permissions);
        }
    }

    /// Opens every result on the current page in the inline preview grid,
    /// embedding each URL in page order. No extra history entries are
    /// written for the opened URLs.
    pub fn open_page_results(&mut self) {
        let urls: Vec<String> = self
            .current_page_results()
            .iter()
            .map(|r| r.url.clone())
            .collect();
        if urls.is_empty() {
            return;
        }
        self.view_manager.open_page_previews(urls.clone());
        if matches!(self.view_manager.view(), ViewState::MultiPreview(_)) {
            for url in &urls {
                self.embedder.embed(url, &self.embed_permissions);
            }
        }
    }

    /// Closes an open preview back to the result list.
    pub fn close_preview(&mut self) {
        self.view_manager.close_preview();
    }

    /// Returns the active tab to the home page and shows the home view.
    pub fn go_home(&mut self) {
        self.tab_manager.update_active(TabPatch {
            url: Some(String::new()),
            title: Some(NEW_TAB_TITLE.to_string()),
        });
        self.view_manager.go_home();
        self.results.clear();
        self.route = Route::Home;
    }

    /// Shows a settings section.
    pub fn open_settings(&mut self, section: SettingsSection) {
        self.route = Route::Settings { section };
    }

    /// Applies a preference change, keeping dependent components in sync.
    pub fn set_preference(
        &mut self,
        key: &str,
        value: serde_json::Value,
    ) -> Result<(), SettingsError> {
        self.settings_engine.set_value(key, value)?;
        self.history_manager
            .set_recording_enabled(self.settings_engine.preferences().privacy.save_history);
        Ok(())
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    /// The full result set for the current query.
    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }
}

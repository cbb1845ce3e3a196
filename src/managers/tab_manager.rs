use uuid::Uuid;

use crate::types::tab::{Tab, TabPatch};

/// Placeholder title for a tab that has not navigated anywhere yet.
pub const NEW_TAB_TITLE: &str = "New Tab";

/// Trait defining the tab set interface.
pub trait TabManagerTrait {
    fn new_tab(&mut self) -> String;
    fn close_tab(&mut self, tab_id: &str);
    fn set_active(&mut self, tab_id: &str);
    fn update_active(&mut self, patch: TabPatch);
    fn get_tab(&self, tab_id: &str) -> Option<&Tab>;
    fn active_tab(&self) -> &Tab;
    fn active_tab_id(&self) -> &str;
    fn all_tabs(&self) -> &[Tab];
    fn tab_count(&self) -> usize;
}

/// In-memory tab set for the browser session.
///
/// The set is never empty: construction creates one default tab and
/// `close_tab` refuses to remove the last remaining one. Every consumer
/// relies on that invariant.
pub struct TabManager {
    tabs: Vec<Tab>,
    active_tab_id: String,
}

impl TabManager {
    pub fn new() -> Self {
        let tab = Self::blank_tab();
        let active_tab_id = tab.id.clone();
        Self {
            tabs: vec![tab],
            active_tab_id,
        }
    }

    fn blank_tab() -> Tab {
        Tab {
            id: Uuid::new_v4().to_string(),
            title: NEW_TAB_TITLE.to_string(),
            url: String::new(),
            favicon: None,
        }
    }

    fn find_tab_index(&self, tab_id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab_id)
    }
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TabManagerTrait for TabManager {
    /// Append a new blank tab and make it active. Returns the new tab's ID.
    fn new_tab(&mut self) -> String {
        let tab = Self::blank_tab();
        let id = tab.id.clone();
        self.tabs.push(tab);
        self.active_tab_id = id.clone();
        id
    }

    /// Close a tab. Closing the sole remaining tab is silently ignored,
    /// as is an unknown ID. If the closed tab was active, the first
    /// remaining tab becomes active.
    fn close_tab(&mut self, tab_id: &str) {
        if self.tabs.len() == 1 {
            return;
        }
        let idx = match self.find_tab_index(tab_id) {
            Some(idx) => idx,
            None => return,
        };
        self.tabs.remove(idx);
        if self.active_tab_id == tab_id {
            self.active_tab_id = self.tabs[0].id.clone();
        }
    }

    /// Make the given tab active. Unknown IDs are silently ignored.
    fn set_active(&mut self, tab_id: &str) {
        if self.find_tab_index(tab_id).is_some() {
            self.active_tab_id = tab_id.to_string();
        }
    }

    /// Apply a partial url/title update to the active tab only.
    fn update_active(&mut self, patch: TabPatch) {
        let active_id = self.active_tab_id.clone();
        if let Some(tab) = self.tabs.iter_mut().find(|t| t.id == active_id) {
            if let Some(url) = patch.url {
                tab.url = url;
            }
            if let Some(title) = patch.title {
                tab.title = title;
            }
        }
    }

    fn get_tab(&self, tab_id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == tab_id)
    }

    fn active_tab(&self) -> &Tab {
        // active_tab_id always refers to a member of the non-empty set
        self.tabs
            .iter()
            .find(|t| t.id == self.active_tab_id)
            .unwrap_or(&self.tabs[0])
    }

    fn active_tab_id(&self) -> &str {
        &self.active_tab_id
    }

    fn all_tabs(&self) -> &[Tab] {
        &self.tabs
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }
}

// SKZ Browser state managers
// Managers handle stateful operations: tabs, bookmarks, history, downloads,
// and the search-page view state.

pub mod bookmark_manager;
pub mod download_manager;
pub mod history_manager;
pub mod tab_manager;
pub mod view_manager;

/// Navigable locations of the shell.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Home,
    Search { query: String, page: usize },
    Settings { section: SettingsSection },
}

/// Sections of the settings panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingsSection {
    Bookmarks,
    History,
    Downloads,
    General,
}

/// Classification of raw address-bar input.
#[derive(Debug, Clone, PartialEq)]
pub enum AddressKind {
    /// Absolute URL with an explicit scheme; navigated to directly.
    Url(String),
    /// Anything else; routed through the search results page.
    Query(String),
    /// Blank input; navigation is not attempted.
    Empty,
}

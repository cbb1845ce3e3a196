use serde::{Deserialize, Serialize};

/// Top-level browser preferences container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrowserPreferences {
    pub general: GeneralPreferences,
    pub privacy: PrivacyPreferences,
}

impl Default for BrowserPreferences {
    fn default() -> Self {
        Self {
            general: GeneralPreferences::default(),
            privacy: PrivacyPreferences::default(),
        }
    }
}

/// General preferences shown on the settings page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralPreferences {
    pub homepage: String,
    pub search_engine: SearchEngine,
}

impl Default for GeneralPreferences {
    fn default() -> Self {
        Self {
            homepage: "skz://newtab".to_string(),
            search_engine: SearchEngine::Yandex,
        }
    }
}

/// Selectable search engine for the address bar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum SearchEngine {
    Yandex,
    Google,
    DuckDuckGo,
}

/// Privacy toggles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrivacyPreferences {
    pub save_history: bool,
    pub save_cookies: bool,
    pub block_ads: bool,
}

impl Default for PrivacyPreferences {
    fn default() -> Self {
        Self {
            save_history: true,
            save_cookies: true,
            block_ads: false,
        }
    }
}

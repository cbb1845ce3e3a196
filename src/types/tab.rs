use serde::{Deserialize, Serialize};

/// Represents a browser tab with its current state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tab {
    pub id: String,
    pub title: String,
    pub url: String,
    pub favicon: Option<String>,
}

/// Partial update applied to the active tab only.
#[derive(Debug, Clone, Default)]
pub struct TabPatch {
    pub url: Option<String>,
    pub title: Option<String>,
}

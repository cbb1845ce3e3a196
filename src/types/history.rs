use serde::{Deserialize, Serialize};

/// A timestamped record of a navigation or search submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    pub id: String,
    pub url: String,
    pub title: String,
    /// Wall-clock time of the visit as an "HH:MM" string.
    pub time: String,
}

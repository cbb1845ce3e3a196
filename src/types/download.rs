use serde::{Deserialize, Serialize};

/// Status of a file download shown in the settings panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum DownloadStatus {
    InProgress,
    Completed,
}

/// A download record shown in the settings panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DownloadRecord {
    pub id: String,
    pub filename: String,
    pub size: Option<u64>,
    pub date: String,
    pub status: DownloadStatus,
}

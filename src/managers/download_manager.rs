//! Download shelf shown in the settings panel.
//!
//! Purely in-memory: the shelf is seeded with default records and supports
//! listing and removal. Nothing here touches the local store.

use crate::types::download::{DownloadRecord, DownloadStatus};

/// Trait defining download shelf operations.
pub trait DownloadManagerTrait {
    fn records(&self) -> &[DownloadRecord];
    fn remove(&mut self, id: &str);
}

/// In-memory download shelf.
pub struct DownloadManager {
    records: Vec<DownloadRecord>,
}

impl DownloadManager {
    /// Creates a shelf seeded with the default completed records.
    pub fn new() -> Self {
        let records = [
            ("1", "document.pdf", 2_400_000, "2024-10-27"),
            ("2", "image.jpg", 1_800_000, "2024-10-26"),
            ("3", "archive.zip", 15_300_000, "2024-10-25"),
        ]
        .iter()
        .map(|(id, filename, size, date)| DownloadRecord {
            id: id.to_string(),
            filename: filename.to_string(),
            size: Some(*size),
            date: date.to_string(),
            status: DownloadStatus::Completed,
        })
        .collect();
        Self { records }
    }
}

impl Default for DownloadManager {
    fn default() -> Self {
        Self::new()
    }
}

impl DownloadManagerTrait for DownloadManager {
    fn records(&self) -> &[DownloadRecord] {
        &self.records
    }

    /// Removes the matching record. Unknown IDs are silently ignored.
    fn remove(&mut self, id: &str) {
        self.records.retain(|r| r.id != id);
    }
}

//! Page embedding capability.
//!
//! Rendering a remote URL is delegated entirely to an implementation of
//! [`PageEmbedder`]; the core fires the request with a declared permission
//! set and observes nothing back.

use std::cell::RefCell;
use std::rc::Rc;

use crate::types::embed::EmbedPermissions;

/// Trait defining the embedding capability.
pub trait PageEmbedder {
    /// Renders `url` in a constrained inline viewing context with the
    /// declared permission set.
    fn embed(&mut self, url: &str, permissions: &EmbedPermissions);
    /// Opens `url` as an independent top-level context.
    fn open_external(&mut self, url: &str);
}

/// Embedder that drops every request. The default for headless use.
#[derive(Debug, Default)]
pub struct DiscardingEmbedder;

impl PageEmbedder for DiscardingEmbedder {
    fn embed(&mut self, _url: &str, _permissions: &EmbedPermissions) {}
    fn open_external(&mut self, _url: &str) {}
}

/// URLs an embedder was asked to render or open.
#[derive(Debug, Default)]
pub struct EmbedLog {
    pub embedded: Vec<String>,
    pub opened: Vec<String>,
}

/// Embedder that records every request, for tests and the demo binary.
///
/// Clones share the same log, so a caller can hand one clone to the app
/// and inspect the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct RecordingEmbedder {
    log: Rc<RefCell<EmbedLog>>,
}

impl RecordingEmbedder {
    pub fn new() -> Self {
        Self::default()
    }

    /// URLs embedded inline so far, in request order.
    pub fn embedded(&self) -> Vec<String> {
        self.log.borrow().embedded.clone()
    }

    /// URLs opened as top-level contexts so far, in request order.
    pub fn opened(&self) -> Vec<String> {
        self.log.borrow().opened.clone()
    }
}

impl PageEmbedder for RecordingEmbedder {
    fn embed(&mut self, url: &str, _permissions: &EmbedPermissions) {
        self.log.borrow_mut().embedded.push(url.to_string());
    }

    fn open_external(&mut self, url: &str) {
        self.log.borrow_mut().opened.push(url.to_string());
    }
}

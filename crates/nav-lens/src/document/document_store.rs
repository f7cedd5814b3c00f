use std::sync::{PoisonError, RwLock};

use dashmap::DashMap;
use tower_lsp::lsp_types::Url;

use super::OpenDocument;

/// Thread-safe table of open documents plus the active one.
///
/// Uses `DashMap` internally so that all operations are safe to call
/// concurrently from any async task without external synchronisation.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: DashMap<Url, OpenDocument>,
    active: RwLock<Option<Url>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a document and make it the active one.
    pub fn open(
        &self,
        uri: Url,
        language_id: String,
        version: i32,
    ) {
        self.documents.insert(uri.clone(), OpenDocument::new(uri.clone(), language_id, version));
        self.set_active(uri);
    }

    /// Record a new version; returns the updated snapshot if the document is
    /// tracked.
    pub fn update_version(
        &self,
        uri: &Url,
        version: i32,
    ) -> Option<OpenDocument> {
        let mut doc = self.documents.get_mut(uri)?;
        doc.version = version;
        Some(doc.clone())
    }

    /// Close (unregister) a document.
    pub fn close(
        &self,
        uri: &Url,
    ) {
        self.documents.remove(uri);
        let mut active = self.active.write().unwrap_or_else(PoisonError::into_inner);
        if active.as_ref() == Some(uri) {
            *active = None;
        }
    }

    pub fn get(
        &self,
        uri: &Url,
    ) -> Option<OpenDocument> {
        self.documents.get(uri).map(|r| r.value().clone())
    }

    pub fn set_active(
        &self,
        uri: Url,
    ) {
        *self.active.write().unwrap_or_else(PoisonError::into_inner) = Some(uri);
    }

    pub fn active(&self) -> Option<Url> {
        self.active.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/src/document/document_store_tests.rs"]
mod tests;

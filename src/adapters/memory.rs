use crate::core::RecordSource;
use crate::utils::error::{AppError, Result};
use async_trait::async_trait;
use mongodb::bson::Document;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Documents held in memory, keyed by their string `_id`.
#[derive(Debug, Default)]
pub struct InMemorySource {
    documents: HashMap<String, Document>,
    queries: AtomicUsize,
    disconnected: AtomicBool,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, document: Document) -> Result<()> {
        let id = document
            .get_str("_id")
            .map_err(|e| AppError::InvalidDocument {
                message: format!("_id must be a string: {}", e),
            })?
            .to_string();
        self.documents.insert(id, document);
        Ok(())
    }

    pub fn with_document(mut self, document: Document) -> Result<Self> {
        self.insert(document)?;
        Ok(self)
    }

    /// Number of `find_by_id` calls served so far.
    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub fn is_disconnected(&self) -> bool {
        self.disconnected.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordSource for InMemorySource {
    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Document>> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        Ok(self.documents.get(id).cloned())
    }

    async fn disconnect(&self) {
        self.disconnected.store(true, Ordering::SeqCst);
    }
}

use crate::utils::error::Result;
use async_trait::async_trait;
use mongodb::bson::Document;

#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Check that the backing store is reachable.
    async fn ping(&self) -> Result<()>;

    /// Exact-match lookup on `_id`. `Ok(None)` when nothing matches.
    async fn find_by_id(&self, id: &str) -> Result<Option<Document>>;

    /// Release the connection. Called once, after the last query.
    async fn disconnect(&self);
}

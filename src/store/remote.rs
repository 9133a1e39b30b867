//! Document store capability

use crate::error::StoreError;
use crate::store::Document;
use async_trait::async_trait;
use serde_json::Value;

/// Read-only access to a remote document store.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Returns every document of `collection` whose `field` equals `value`.
    async fn query_eq(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<Vec<Document>, StoreError>;

    /// Fetches the document stored under `key`, if any.
    async fn get_by_key(&self, collection: &str, key: &str)
    -> Result<Option<Document>, StoreError>;
}

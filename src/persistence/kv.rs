//! Key-value capability

use crate::error::PersistenceError;
use async_trait::async_trait;

/// String slots addressed by key.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError>;

    async fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Removing a key that is not present succeeds.
    async fn delete(&self, key: &str) -> Result<(), PersistenceError>;
}

use crate::error::PersistenceError;
use crate::persistence::KeyValueStore;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// Key-value slots held in memory
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.slots
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.slots.lock().await.get(key).cloned())
    }

    async fn delete(&self, key: &str) -> Result<(), PersistenceError> {
        self.slots.lock().await.remove(key);
        Ok(())
    }
}

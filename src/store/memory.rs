//! In-process document store
//!
//! Backs the binary with a JSON fixture file and stands in for the remote
//! store in tests.

use crate::error::StoreError;
use crate::store::{Document, DocumentStore};
use async_trait::async_trait;
use log::{debug, info};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tokio::sync::RwLock;

type Collection = BTreeMap<String, Map<String, Value>>;

/// Collections of documents ordered by key
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<String, Collection>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a fixture of the form `{ "<collection>": { "<key>": { fields } } }`.
    pub async fn from_fixture_file(path: &Path) -> Result<Self, StoreError> {
        let raw = tokio::fs::read_to_string(path).await?;
        let store = Self::from_fixture_str(&raw)?;
        info!("Loaded document fixture from {}", path.display());
        Ok(store)
    }

    pub fn from_fixture_str(raw: &str) -> Result<Self, StoreError> {
        let fixture: HashMap<String, BTreeMap<String, Value>> = serde_json::from_str(raw)
            .map_err(|e| StoreError::Unavailable(format!("invalid fixture: {}", e)))?;

        let mut collections = HashMap::new();
        for (name, documents) in fixture {
            let mut collection = Collection::new();
            for (key, value) in documents {
                match value {
                    Value::Object(fields) => {
                        collection.insert(key, fields);
                    }
                    _ => {
                        return Err(StoreError::Malformed {
                            collection: name,
                            key,
                            reason: "document is not an object".into(),
                        });
                    }
                }
            }
            collections.insert(name, collection);
        }

        Ok(Self {
            collections: RwLock::new(collections),
        })
    }

    /// Inserts or replaces a document.
    pub async fn insert(&self, collection: &str, key: &str, fields: Map<String, Value>) {
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(key.to_string(), fields);
    }

    /// Number of documents in a collection
    pub async fn len(&self, collection: &str) -> usize {
        let collections = self.collections.read().await;
        collections.get(collection).map_or(0, BTreeMap::len)
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn query_eq(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        let matches: Vec<Document> = collections
            .get(collection)
            .into_iter()
            .flat_map(|docs| docs.iter())
            .filter(|(_, fields)| fields.get(field) == Some(value))
            .map(|(key, fields)| Document::new(key.clone(), fields.clone()))
            .collect();

        debug!(
            "query {} where {} == {}: {} match(es)",
            collection,
            field,
            value,
            matches.len()
        );
        Ok(matches)
    }

    async fn get_by_key(
        &self,
        collection: &str,
        key: &str,
    ) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.get(key))
            .map(|fields| Document::new(key, fields.clone())))
    }
}

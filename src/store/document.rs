//! Document returned by the store

use crate::error::StoreError;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// A stored document: its key plus its top-level fields
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub key: String,
    pub fields: Map<String, Value>,
}

impl Document {
    pub fn new(key: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            key: key.into(),
            fields,
        }
    }

    /// Returns the field as a string, or None if absent or not a string.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    /// Decodes the document fields into `T`.
    pub fn decode<T: DeserializeOwned>(&self, collection: &str) -> Result<T, StoreError> {
        serde_json::from_value(Value::Object(self.fields.clone())).map_err(|e| {
            StoreError::Malformed {
                collection: collection.to_string(),
                key: self.key.clone(),
                reason: e.to_string(),
            }
        })
    }
}

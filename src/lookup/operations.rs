//! Lookup operations implementation

use crate::lookup::LookupOutcome;
use crate::model::DriverRecord;
use crate::store::DocumentStore;
use log::{info, warn};
use serde_json::Value;
use std::sync::Arc;

/// Queries the drivers collection by civil ID.
///
/// Each call performs exactly one query: no retry, no caching.
#[derive(Clone)]
pub struct RecordLookupService {
    store: Arc<dyn DocumentStore>,
    collection: String,
    civil_id_field: String,
}

impl RecordLookupService {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        collection: impl Into<String>,
        civil_id_field: impl Into<String>,
    ) -> Self {
        Self {
            store,
            collection: collection.into(),
            civil_id_field: civil_id_field.into(),
        }
    }

    /// Looks up the record whose civil ID equals `civil_id`.
    ///
    /// Store failures are returned, not logged; the caller decides how to
    /// report them.
    ///
    /// Civil IDs are assumed unique but the store does not enforce it; when
    /// several documents match, the first one in store order wins.
    pub async fn find_driver_by_civil_id(&self, civil_id: &str) -> LookupOutcome {
        let value = Value::String(civil_id.to_string());
        let documents = match self
            .store
            .query_eq(&self.collection, &self.civil_id_field, &value)
            .await
        {
            Ok(documents) => documents,
            Err(e) => return LookupOutcome::TransientError(e),
        };

        if documents.len() > 1 {
            warn!(
                "{} documents in {} share civil ID {}; using {}",
                documents.len(),
                self.collection,
                civil_id,
                documents[0].key
            );
        }

        let Some(document) = documents.into_iter().next() else {
            info!("No driver record for civil ID {}", civil_id);
            return LookupOutcome::NotFound;
        };

        match document.decode::<DriverRecord>(&self.collection) {
            Ok(record) => LookupOutcome::Found(record),
            Err(e) => LookupOutcome::TransientError(e),
        }
    }
}

impl std::fmt::Debug for RecordLookupService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordLookupService")
            .field("collection", &self.collection)
            .field("civil_id_field", &self.civil_id_field)
            .finish_non_exhaustive()
    }
}

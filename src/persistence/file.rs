//! File-backed key-value store
//!
//! All slots live in one JSON object file. The file is created on first
//! write; a missing file reads as an empty store. Reads of a corrupt file
//! fail, but the next write replaces it with a fresh one.

use crate::error::PersistenceError;
use crate::persistence::KeyValueStore;
use async_trait::async_trait;
use log::{debug, warn};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

type Slots = BTreeMap<String, String>;

#[derive(Debug)]
pub struct FileKeyValueStore {
    path: PathBuf,
    // Serializes read-modify-write cycles on the file
    lock: Mutex<()>,
}

impl FileKeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_slots(&self) -> Result<Slots, PersistenceError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) if raw.trim().is_empty() => Ok(Slots::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Slots::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Current slots, or an empty set when the file cannot be parsed.
    async fn read_slots_for_write(&self) -> Result<Slots, PersistenceError> {
        match self.read_slots().await {
            Err(PersistenceError::Corrupt(reason)) => {
                warn!(
                    "Discarding corrupt key-value file {}: {}",
                    self.path.display(),
                    reason
                );
                Ok(Slots::new())
            }
            other => other,
        }
    }

    async fn write_slots(&self, slots: &Slots) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        // Write to a sibling file and rename so a crash never leaves half a file
        let tmp = self.path.with_extension("tmp");
        let raw = serde_json::to_string_pretty(slots)?;
        tokio::fs::write(&tmp, raw).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        debug!("Wrote {} slot(s) to {}", slots.len(), self.path.display());
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let _guard = self.lock.lock().await;
        let mut slots = self.read_slots_for_write().await?;
        slots.insert(key.to_string(), value.to_string());
        self.write_slots(&slots).await
    }

    async fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let _guard = self.lock.lock().await;
        let slots = self.read_slots().await?;
        Ok(slots.get(key).cloned())
    }

    async fn delete(&self, key: &str) -> Result<(), PersistenceError> {
        let _guard = self.lock.lock().await;
        match self.read_slots().await {
            Ok(mut slots) => {
                if slots.remove(key).is_some() {
                    self.write_slots(&slots).await?;
                }
                Ok(())
            }
            Err(PersistenceError::Corrupt(reason)) => {
                warn!(
                    "Discarding corrupt key-value file {}: {}",
                    self.path.display(),
                    reason
                );
                self.write_slots(&Slots::new()).await
            }
            Err(e) => Err(e),
        }
    }
}

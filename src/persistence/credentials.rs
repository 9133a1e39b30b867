//! Remembered civil ID
//!
//! Best-effort: storage failures are logged and reported as `false`/`None`,
//! never as errors, so they cannot block a login.

use crate::persistence::KeyValueStore;
use log::{debug, warn};
use std::sync::Arc;

/// Key used when none is configured
pub const DEFAULT_REMEMBER_KEY: &str = "@auth_civil_id";

/// Single slot holding the civil ID saved by "remember me"
#[derive(Clone)]
pub struct CredentialStore {
    kv: Arc<dyn KeyValueStore>,
    key: String,
}

impl CredentialStore {
    pub fn new(kv: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            kv,
            key: key.into(),
        }
    }

    pub fn with_default_key(kv: Arc<dyn KeyValueStore>) -> Self {
        Self::new(kv, DEFAULT_REMEMBER_KEY)
    }

    pub async fn save(&self, civil_id: &str) -> bool {
        match self.kv.set(&self.key, civil_id).await {
            Ok(()) => {
                debug!("Remembered civil ID saved");
                true
            }
            Err(e) => {
                warn!("Error saving civil ID: {}", e);
                false
            }
        }
    }

    pub async fn load(&self) -> Option<String> {
        match self.kv.get(&self.key).await {
            Ok(value) => value,
            Err(e) => {
                warn!("Error getting saved civil ID: {}", e);
                None
            }
        }
    }

    pub async fn clear(&self) -> bool {
        match self.kv.delete(&self.key).await {
            Ok(()) => true,
            Err(e) => {
                warn!("Error clearing saved civil ID: {}", e);
                false
            }
        }
    }
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

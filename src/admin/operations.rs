//! Admin authentication operations

use crate::admin::AdminAuthOutcome;
use crate::model::AdminCredential;
use crate::store::DocumentStore;
use log::info;
use std::sync::Arc;

const PASSWORD_FIELD: &str = "password";

#[derive(Clone)]
pub struct AdminAuthService {
    store: Arc<dyn DocumentStore>,
    collection: String,
}

impl AdminAuthService {
    pub fn new(store: Arc<dyn DocumentStore>, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
        }
    }

    /// Authenticates `username` with an exact, case-sensitive password match.
    pub async fn authenticate(&self, username: &str, password: &str) -> AdminAuthOutcome {
        let document = match self.store.get_by_key(&self.collection, username).await {
            Ok(document) => document,
            Err(e) => return AdminAuthOutcome::TransientError(e),
        };

        let credential = document.and_then(|doc| {
            doc.get_str(PASSWORD_FIELD).map(|stored| AdminCredential {
                username: doc.key.clone(),
                password: stored.to_string(),
            })
        });

        match credential {
            Some(credential) if credential.matches(password) => {
                info!("Admin {} logged in", username);
                AdminAuthOutcome::Success {
                    username: credential.username,
                }
            }
            _ => {
                info!("Rejected admin login for {}", username);
                AdminAuthOutcome::InvalidCredentials
            }
        }
    }
}

impl std::fmt::Debug for AdminAuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminAuthService")
            .field("collection", &self.collection)
            .finish_non_exhaustive()
    }
}

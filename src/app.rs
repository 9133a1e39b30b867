//! Application wiring
//!
//! Builds the collaborators named by the configuration and hands them to a
//! session controller.

use crate::admin::AdminAuthService;
use crate::config::AppConfig;
use crate::error::PortalError;
use crate::lookup::RecordLookupService;
use crate::persistence::{CredentialStore, FileKeyValueStore};
use crate::session::SessionController;
use crate::store::{DocumentStore, MemoryDocumentStore};
use log::info;
use std::sync::Arc;

/// Builds a controller over the fixture-backed store and the file-backed slot.
pub async fn build_controller(config: &AppConfig) -> Result<SessionController, PortalError> {
    let store = MemoryDocumentStore::from_fixture_file(&config.store.fixtures_path()).await?;
    info!(
        "Document store ready: {} driver(s), {} admin(s)",
        store.len(&config.store.drivers_collection).await,
        store.len(&config.store.admins_collection).await
    );

    let store: Arc<dyn DocumentStore> = Arc::new(store);
    let kv = Arc::new(FileKeyValueStore::new(config.client.credentials_path()));
    info!("Remember-me slot stored in {}", kv.path().display());

    let credentials = CredentialStore::new(kv, &config.client.remember_key);
    Ok(controller_from_parts(config, store, credentials))
}

/// Builds a controller over caller-supplied collaborators.
pub fn controller_from_parts(
    config: &AppConfig,
    store: Arc<dyn DocumentStore>,
    credentials: CredentialStore,
) -> SessionController {
    SessionController::new(
        RecordLookupService::new(
            store.clone(),
            &config.store.drivers_collection,
            &config.store.civil_id_field,
        ),
        AdminAuthService::new(store, &config.store.admins_collection),
        credentials,
        config.client.lookup_timeout(),
    )
}

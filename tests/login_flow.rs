use async_trait::async_trait;
use driver_portal::admin::AdminAuthService;
use driver_portal::error::{PersistenceError, StoreError, ValidationError};
use driver_portal::lookup::RecordLookupService;
use driver_portal::persistence::{
    CredentialStore, FileKeyValueStore, KeyValueStore, MemoryKeyValueStore,
};
use driver_portal::session::{Screen, SessionController, SessionFailure};
use driver_portal::store::{Document, DocumentStore, MemoryDocumentStore};
use serde_json::Value;
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::Notify;

const FIXTURE: &str = r#"{
    "drivers": {
        "drv-0001": {
            "civil_id": "292624047141",
            "driver_id": "D-10482",
            "driver_name": "Ali",
            "avg_rating": 4.82,
            "on_time": 0.934
        }
    },
    "admins": {
        "admin1": { "password": "secret" }
    }
}"#;

const REMEMBER_KEY: &str = "@auth_civil_id";

/// Counts queries and holds each one until the gate is opened.
struct GatedStore {
    inner: MemoryDocumentStore,
    gate: Option<Arc<Notify>>,
    calls: AtomicUsize,
}

impl GatedStore {
    fn open() -> Self {
        Self {
            inner: MemoryDocumentStore::from_fixture_str(FIXTURE).unwrap(),
            gate: None,
            calls: AtomicUsize::new(0),
        }
    }

    fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::open()
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentStore for GatedStore {
    async fn query_eq(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<Vec<Document>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.inner.query_eq(collection, field, value).await
    }

    async fn get_by_key(
        &self,
        collection: &str,
        key: &str,
    ) -> Result<Option<Document>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.inner.get_by_key(collection, key).await
    }
}

/// A store that never answers
struct SilentStore;

#[async_trait]
impl DocumentStore for SilentStore {
    async fn query_eq(
        &self,
        _collection: &str,
        _field: &str,
        _value: &Value,
    ) -> Result<Vec<Document>, StoreError> {
        std::future::pending().await
    }

    async fn get_by_key(
        &self,
        _collection: &str,
        _key: &str,
    ) -> Result<Option<Document>, StoreError> {
        std::future::pending().await
    }
}

/// Answers every query, but only after a pause
struct SlowStore {
    inner: MemoryDocumentStore,
    delay: Duration,
}

#[async_trait]
impl DocumentStore for SlowStore {
    async fn query_eq(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<Vec<Document>, StoreError> {
        tokio::time::sleep(self.delay).await;
        self.inner.query_eq(collection, field, value).await
    }

    async fn get_by_key(
        &self,
        collection: &str,
        key: &str,
    ) -> Result<Option<Document>, StoreError> {
        tokio::time::sleep(self.delay).await;
        self.inner.get_by_key(collection, key).await
    }
}

struct ReadOnlyDisk;

#[async_trait]
impl KeyValueStore for ReadOnlyDisk {
    async fn set(&self, _key: &str, _value: &str) -> Result<(), PersistenceError> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only").into())
    }

    async fn get(&self, _key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(None)
    }

    async fn delete(&self, _key: &str) -> Result<(), PersistenceError> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only").into())
    }
}

fn controller(
    store: Arc<dyn DocumentStore>,
    kv: Arc<dyn KeyValueStore>,
    timeout: Duration,
) -> SessionController {
    SessionController::new(
        RecordLookupService::new(store.clone(), "drivers", "civil_id"),
        AdminAuthService::new(store, "admins"),
        CredentialStore::new(kv, REMEMBER_KEY),
        timeout,
    )
}

async fn wait_until_busy(controller: &SessionController) {
    for _ in 0..1000 {
        if controller.is_busy().await {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("submission never started");
}

#[tokio::test]
async fn driver_scenario_found_and_not_found() {
    let kv = Arc::new(MemoryKeyValueStore::new());
    let controller = controller(Arc::new(GatedStore::open()), kv, Duration::from_secs(5));

    let err = controller
        .submit_driver_login("000000000000", false)
        .await
        .unwrap_err();
    assert_eq!(err.message(), "Invalid Civil ID");
    assert_eq!(controller.screen().await, Screen::DriverLogin);

    controller
        .submit_driver_login("292624047141", false)
        .await
        .unwrap();
    let snapshot = controller.snapshot().await;
    assert_eq!(snapshot.state.screen(), Screen::DriverDashboard);
    assert_eq!(snapshot.state.current_record().unwrap().driver_name, "Ali");
    assert!(!snapshot.busy);
}

#[tokio::test]
async fn incomplete_input_never_reaches_the_store() {
    let store = Arc::new(GatedStore::open());
    let kv = Arc::new(MemoryKeyValueStore::new());
    let controller = controller(store.clone(), kv, Duration::from_secs(5));

    assert_eq!(
        controller.submit_driver_login("", false).await.unwrap_err(),
        SessionFailure::Validation(ValidationError::EmptyCivilId)
    );
    assert_eq!(
        controller
            .submit_driver_login("29262404714", false)
            .await
            .unwrap_err(),
        SessionFailure::Validation(ValidationError::IncompleteCivilId)
    );
    assert_eq!(store.calls(), 0);
    assert!(!controller.is_busy().await);
}

#[tokio::test]
async fn admin_scenario() {
    let kv = Arc::new(MemoryKeyValueStore::new());
    let controller = controller(Arc::new(GatedStore::open()), kv, Duration::from_secs(5));
    controller.show_admin_login().await.unwrap();

    assert_eq!(
        controller
            .submit_admin_login("admin1", "Secret")
            .await
            .unwrap_err(),
        SessionFailure::InvalidCredentials
    );
    assert_eq!(
        controller
            .submit_admin_login("nobody", "secret")
            .await
            .unwrap_err(),
        SessionFailure::InvalidCredentials
    );
    assert_eq!(
        controller.submit_admin_login("admin1", " ").await.unwrap_err(),
        SessionFailure::Validation(ValidationError::EmptyAdminFields)
    );
    assert_eq!(controller.screen().await, Screen::AdminLogin);

    controller
        .submit_admin_login("admin1", "secret")
        .await
        .unwrap();
    assert_eq!(controller.screen().await, Screen::AdminDashboard);
}

#[tokio::test]
async fn logout_keeps_remembered_civil_id() {
    let kv = Arc::new(MemoryKeyValueStore::new());
    let controller = controller(
        Arc::new(GatedStore::open()),
        kv.clone(),
        Duration::from_secs(5),
    );

    controller
        .submit_driver_login("292624047141", true)
        .await
        .unwrap();
    controller.logout().await.unwrap();

    assert_eq!(controller.screen().await, Screen::DriverLogin);
    assert!(controller.current_record().await.is_none());
    assert_eq!(
        kv.get(REMEMBER_KEY).await.unwrap().as_deref(),
        Some("292624047141")
    );
}

#[tokio::test]
async fn second_submission_while_busy_is_refused() {
    let gate = Arc::new(Notify::new());
    let store = Arc::new(GatedStore::gated(gate.clone()));
    let kv = Arc::new(MemoryKeyValueStore::new());
    let controller = controller(store.clone(), kv, Duration::from_secs(5));

    let first = controller.clone();
    let handle =
        tokio::spawn(async move { first.submit_driver_login("292624047141", false).await });
    wait_until_busy(&controller).await;

    assert_eq!(
        controller
            .submit_driver_login("292624047141", false)
            .await
            .unwrap_err(),
        SessionFailure::Busy
    );
    assert_eq!(store.calls(), 1);

    gate.notify_one();
    handle.await.unwrap().unwrap();
    assert_eq!(controller.screen().await, Screen::DriverDashboard);
    assert!(!controller.is_busy().await);
}

#[tokio::test]
async fn cancelled_submission_does_not_leave_the_screen_busy() {
    let store = Arc::new(SlowStore {
        inner: MemoryDocumentStore::from_fixture_str(FIXTURE).unwrap(),
        delay: Duration::from_millis(200),
    });
    let kv = Arc::new(MemoryKeyValueStore::new());
    let controller = controller(store, kv, Duration::from_secs(5));

    let cancelled = tokio::time::timeout(
        Duration::from_millis(20),
        controller.submit_driver_login("292624047141", false),
    )
    .await;
    assert!(cancelled.is_err());
    assert!(!controller.is_busy().await);
    assert_eq!(controller.screen().await, Screen::DriverLogin);

    controller
        .submit_driver_login("292624047141", false)
        .await
        .unwrap();
    assert_eq!(controller.screen().await, Screen::DriverDashboard);
    assert!(!controller.is_busy().await);
}

#[tokio::test]
async fn screen_is_checked_before_input() {
    let store = Arc::new(GatedStore::open());
    let kv = Arc::new(MemoryKeyValueStore::new());
    let controller = controller(store.clone(), kv, Duration::from_secs(5));

    assert_eq!(
        controller.query_driver("").await.unwrap_err(),
        SessionFailure::WrongScreen(Screen::DriverLogin)
    );
    assert_eq!(
        controller.submit_admin_login("", "").await.unwrap_err(),
        SessionFailure::WrongScreen(Screen::DriverLogin)
    );

    controller.show_admin_login().await.unwrap();
    controller.submit_admin_login("admin1", "secret").await.unwrap();
    assert_eq!(
        controller.submit_driver_login("123", false).await.unwrap_err(),
        SessionFailure::WrongScreen(Screen::AdminDashboard)
    );
    assert_eq!(controller.screen().await, Screen::AdminDashboard);
}

#[tokio::test]
async fn result_arriving_after_navigation_is_abandoned() {
    let gate = Arc::new(Notify::new());
    let store = Arc::new(GatedStore::gated(gate.clone()));
    let kv = Arc::new(MemoryKeyValueStore::new());
    let controller = controller(store, kv.clone(), Duration::from_secs(5));

    let pending = controller.clone();
    let handle =
        tokio::spawn(async move { pending.submit_driver_login("292624047141", true).await });
    wait_until_busy(&controller).await;

    controller.show_admin_login().await.unwrap();
    gate.notify_one();

    assert_eq!(handle.await.unwrap().unwrap_err(), SessionFailure::Abandoned);
    assert_eq!(controller.screen().await, Screen::AdminLogin);
    assert!(!controller.is_busy().await);
    // The found record must not have touched the remember-me slot
    assert_eq!(kv.get(REMEMBER_KEY).await.unwrap(), None);
}

#[tokio::test]
async fn lookup_that_never_answers_times_out() {
    let kv = Arc::new(MemoryKeyValueStore::new());
    let controller = controller(Arc::new(SilentStore), kv, Duration::from_millis(20));

    let err = controller
        .submit_driver_login("292624047141", false)
        .await
        .unwrap_err();
    assert_eq!(err, SessionFailure::Transient);
    assert_eq!(err.message(), "Login failed. Please try again.");
    assert_eq!(controller.screen().await, Screen::DriverLogin);
    assert!(!controller.is_busy().await);

    controller.show_admin_login().await.unwrap();
    assert_eq!(
        controller
            .submit_admin_login("admin1", "secret")
            .await
            .unwrap_err(),
        SessionFailure::Transient
    );
}

#[tokio::test]
async fn persistence_failure_does_not_block_login() {
    let controller = controller(
        Arc::new(GatedStore::open()),
        Arc::new(ReadOnlyDisk),
        Duration::from_secs(5),
    );

    let result = controller
        .submit_driver_login("292624047141", true)
        .await
        .unwrap();
    assert!(!result.credential_persisted);
    assert_eq!(controller.screen().await, Screen::DriverDashboard);
}

#[tokio::test]
async fn remembered_civil_id_survives_restart() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("credentials.json");

    let first = controller(
        Arc::new(GatedStore::open()),
        Arc::new(FileKeyValueStore::new(&path)),
        Duration::from_secs(5),
    );
    assert!(first.mount_driver_login().await.civil_id.is_empty());
    first
        .submit_driver_login("292624047141", true)
        .await
        .unwrap();

    let second = controller(
        Arc::new(GatedStore::open()),
        Arc::new(FileKeyValueStore::new(&path)),
        Duration::from_secs(5),
    );
    let form = second.mount_driver_login().await;
    assert_eq!(form.civil_id, "292624047141");
    assert!(form.remember);
    assert!(form.can_submit());
}

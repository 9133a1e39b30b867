//! Session controller
//!
//! Orchestrates the login flows and screen transitions:
//!
//! ```text
//! driver-login  --Found-------------> driver-dashboard
//! driver-login  --admin-------------> admin-login
//! admin-login   --back--------------> driver-login
//! admin-login   --Success-----------> admin-dashboard
//! *-dashboard   --logout------------> driver-login
//! ```
//!
//! Every transition advances an epoch. A submission records the epoch it
//! started in and its result is dropped if the screen changed meanwhile.
//! The in-flight marker is released when the submission's future completes
//! or is dropped, so cancelling a submission never leaves the screen busy.

use crate::admin::{AdminAuthOutcome, AdminAuthService};
use crate::error::handlers::handle_error;
use crate::error::{PortalError, StoreError};
use crate::lookup::{LookupOutcome, RecordLookupService};
use crate::model::DriverRecord;
use crate::persistence::CredentialStore;
use crate::session::{
    AdminLoginResult, DriverLoginForm, DriverLoginResult, Screen, SessionFailure,
    SessionSnapshot, SessionState,
};
use crate::validate;
use log::{debug, info};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;

const IDLE: u64 = 0;

#[derive(Debug, Default)]
struct Session {
    state: SessionState,
    epoch: u64,
}

/// State shared by every clone of a controller
#[derive(Debug, Default)]
struct Shared {
    session: Mutex<Session>,
    /// Ticket of the submission in flight, `IDLE` when none
    in_flight: AtomicU64,
    tickets: AtomicU64,
}

impl Shared {
    fn transition(&self, session: &mut Session, next: SessionState) {
        debug!("Screen {} -> {}", session.state.screen(), next.screen());
        session.state = next;
        session.epoch += 1;
        self.in_flight.store(IDLE, Ordering::SeqCst);
    }

    fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) != IDLE
    }
}

/// Marks one submission as in flight until dropped
struct InFlight {
    shared: Arc<Shared>,
    ticket: u64,
    epoch: u64,
}

impl InFlight {
    /// Fails if the screen changed since the submission started.
    fn check_current(&self, session: &Session) -> Result<(), SessionFailure> {
        if session.epoch != self.epoch {
            info!("Discarding result of a request from a screen that is gone");
            return Err(SessionFailure::Abandoned);
        }
        Ok(())
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        // Only release our own ticket; a transition or a newer submission may own it now
        let _ = self.shared.in_flight.compare_exchange(
            self.ticket,
            IDLE,
            Ordering::SeqCst,
            Ordering::SeqCst,
        );
    }
}

/// Drives one app session. Clones share the same session.
#[derive(Debug, Clone)]
pub struct SessionController {
    shared: Arc<Shared>,
    lookup: RecordLookupService,
    admin_auth: AdminAuthService,
    credentials: CredentialStore,
    lookup_timeout: Duration,
}

impl SessionController {
    pub fn new(
        lookup: RecordLookupService,
        admin_auth: AdminAuthService,
        credentials: CredentialStore,
        lookup_timeout: Duration,
    ) -> Self {
        Self {
            shared: Arc::new(Shared::default()),
            lookup,
            admin_auth,
            credentials,
            lookup_timeout,
        }
    }

    // --------------------
    // Queries
    // --------------------

    pub async fn snapshot(&self) -> SessionSnapshot {
        let session = self.shared.session.lock().await;
        SessionSnapshot {
            state: session.state.clone(),
            busy: self.shared.is_busy(),
        }
    }

    pub async fn screen(&self) -> Screen {
        self.shared.session.lock().await.state.screen()
    }

    pub async fn is_busy(&self) -> bool {
        self.shared.is_busy()
    }

    pub async fn current_record(&self) -> Option<DriverRecord> {
        self.shared
            .session
            .lock()
            .await
            .state
            .current_record()
            .cloned()
    }

    pub async fn admin_username(&self) -> Option<String> {
        self.shared
            .session
            .lock()
            .await
            .state
            .admin_username()
            .map(str::to_string)
    }

    /// Loads the remembered civil ID to pre-fill the driver login form.
    pub async fn mount_driver_login(&self) -> DriverLoginForm {
        match self.credentials.load().await {
            Some(civil_id) => DriverLoginForm {
                civil_id: validate::normalize(&civil_id),
                remember: true,
            },
            None => DriverLoginForm::default(),
        }
    }

    // --------------------
    // Navigation
    // --------------------

    pub async fn show_admin_login(&self) -> Result<(), SessionFailure> {
        self.navigate(Screen::DriverLogin, SessionState::AdminLogin)
            .await
    }

    pub async fn back_to_driver_login(&self) -> Result<(), SessionFailure> {
        self.navigate(Screen::AdminLogin, SessionState::DriverLogin)
            .await
    }

    /// Returns to the driver login screen. The remembered civil ID is kept.
    pub async fn logout(&self) -> Result<(), SessionFailure> {
        let mut session = self.shared.session.lock().await;
        match session.state.screen() {
            Screen::DriverDashboard | Screen::AdminDashboard => {
                info!("Logged out from {}", session.state.screen());
                self.shared
                    .transition(&mut session, SessionState::DriverLogin);
                Ok(())
            }
            other => Err(SessionFailure::WrongScreen(other)),
        }
    }

    async fn navigate(&self, from: Screen, next: SessionState) -> Result<(), SessionFailure> {
        let mut session = self.shared.session.lock().await;
        let current = session.state.screen();
        if current != from {
            return Err(SessionFailure::WrongScreen(current));
        }
        self.shared.transition(&mut session, next);
        Ok(())
    }

    // --------------------
    // Submissions
    // --------------------

    /// Driver login: validate, look up, update the remember-me slot, then
    /// show the dashboard.
    pub async fn submit_driver_login(
        &self,
        input: &str,
        remember: bool,
    ) -> Result<DriverLoginResult, SessionFailure> {
        self.ensure_screen(Screen::DriverLogin).await?;
        let civil_id = validate::validate_civil_id(input)?;
        let in_flight = self.begin(Screen::DriverLogin).await?;

        let outcome = self.lookup_with_timeout(&civil_id).await;

        let mut session = self.shared.session.lock().await;
        in_flight.check_current(&session)?;

        let record = match outcome {
            LookupOutcome::Found(record) => record,
            LookupOutcome::NotFound => return Err(SessionFailure::NotFound),
            LookupOutcome::TransientError(e) => {
                handle_error(&PortalError::from(e));
                return Err(SessionFailure::Transient);
            }
        };

        // Held across the write so the slot is settled before the transition
        let credential_persisted = if remember {
            self.credentials.save(&civil_id).await
        } else {
            self.credentials.clear().await
        };

        info!("Driver {} logged in", record.driver_id);
        self.shared
            .transition(&mut session, SessionState::DriverDashboard(record.clone()));

        Ok(DriverLoginResult {
            record,
            credential_persisted,
        })
    }

    /// Admin login. Failures leave the admin login screen active.
    pub async fn submit_admin_login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AdminLoginResult, SessionFailure> {
        self.ensure_screen(Screen::AdminLogin).await?;
        validate::validate_admin_fields(username, password)?;
        let in_flight = self.begin(Screen::AdminLogin).await?;

        let outcome = match tokio::time::timeout(
            self.lookup_timeout,
            self.admin_auth.authenticate(username, password),
        )
        .await
        {
            Ok(outcome) => outcome,
            Err(_) => AdminAuthOutcome::TransientError(StoreError::Timeout(self.lookup_timeout)),
        };

        let mut session = self.shared.session.lock().await;
        in_flight.check_current(&session)?;

        match outcome {
            AdminAuthOutcome::Success { username } => {
                self.shared.transition(
                    &mut session,
                    SessionState::AdminDashboard {
                        username: username.clone(),
                    },
                );
                Ok(AdminLoginResult { username })
            }
            AdminAuthOutcome::InvalidCredentials => Err(SessionFailure::InvalidCredentials),
            AdminAuthOutcome::TransientError(e) => {
                handle_error(&PortalError::from(e));
                Err(SessionFailure::Transient)
            }
        }
    }

    /// Driver search from the admin dashboard. Does not change screens.
    pub async fn query_driver(&self, input: &str) -> Result<DriverRecord, SessionFailure> {
        self.ensure_screen(Screen::AdminDashboard).await?;
        let civil_id = validate::validate_query_civil_id(input)?;
        let in_flight = self.begin(Screen::AdminDashboard).await?;

        let outcome = self.lookup_with_timeout(&civil_id).await;

        let session = self.shared.session.lock().await;
        in_flight.check_current(&session)?;

        match outcome {
            LookupOutcome::Found(record) => Ok(record),
            LookupOutcome::NotFound => Err(SessionFailure::NotFound),
            LookupOutcome::TransientError(e) => {
                handle_error(&PortalError::from(e));
                Err(SessionFailure::Transient)
            }
        }
    }

    async fn ensure_screen(&self, expected: Screen) -> Result<(), SessionFailure> {
        let current = self.screen().await;
        if current != expected {
            return Err(SessionFailure::WrongScreen(current));
        }
        Ok(())
    }

    /// Claims the in-flight slot for a submission started on `expected`.
    async fn begin(&self, expected: Screen) -> Result<InFlight, SessionFailure> {
        let session = self.shared.session.lock().await;
        let current = session.state.screen();
        if current != expected {
            return Err(SessionFailure::WrongScreen(current));
        }

        let ticket = self.shared.tickets.fetch_add(1, Ordering::SeqCst) + 1;
        if self
            .shared
            .in_flight
            .compare_exchange(IDLE, ticket, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(SessionFailure::Busy);
        }

        Ok(InFlight {
            shared: Arc::clone(&self.shared),
            ticket,
            epoch: session.epoch,
        })
    }

    async fn lookup_with_timeout(&self, civil_id: &str) -> LookupOutcome {
        match tokio::time::timeout(
            self.lookup_timeout,
            self.lookup.find_driver_by_civil_id(civil_id),
        )
        .await
        {
            Ok(outcome) => outcome,
            Err(_) => LookupOutcome::TransientError(StoreError::Timeout(self.lookup_timeout)),
        }
    }
}

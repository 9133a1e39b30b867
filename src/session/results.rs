//! Session result types

use crate::error::handlers::{
    DRIVER_NOT_FOUND, INVALID_CIVIL_ID, INVALID_CREDENTIALS, LOGIN_FAILED, QUERY_FAILED,
    REQUEST_ABANDONED, REQUEST_IN_FLIGHT, user_message,
};
use crate::error::{PortalError, ValidationError};
use crate::model::DriverRecord;
use crate::session::Screen;

/// Result of a successful driver login
#[derive(Debug, Clone)]
pub struct DriverLoginResult {
    pub record: DriverRecord,
    /// Whether the remember-me slot was updated as requested
    pub credential_persisted: bool,
}

/// Result of a successful admin login
#[derive(Debug, Clone)]
pub struct AdminLoginResult {
    pub username: String,
}

/// Why an action left the session where it was
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionFailure {
    Validation(ValidationError),
    NotFound,
    InvalidCredentials,
    Transient,
    /// Another submission is still in flight
    Busy,
    /// The action is not offered on the active screen
    WrongScreen(Screen),
    /// The screen changed before the request completed
    Abandoned,
}

impl SessionFailure {
    /// Message shown on the login screens
    pub fn message(&self) -> String {
        match self {
            SessionFailure::Validation(e) => {
                user_message(&PortalError::from(e.clone())).to_string()
            }
            SessionFailure::NotFound => INVALID_CIVIL_ID.to_string(),
            SessionFailure::InvalidCredentials => INVALID_CREDENTIALS.to_string(),
            SessionFailure::Transient => LOGIN_FAILED.to_string(),
            SessionFailure::Busy => REQUEST_IN_FLIGHT.to_string(),
            SessionFailure::WrongScreen(screen) => {
                format!("Not available on the {} screen", screen)
            }
            SessionFailure::Abandoned => REQUEST_ABANDONED.to_string(),
        }
    }

    /// Message shown by the admin driver search
    pub fn query_message(&self) -> String {
        match self {
            SessionFailure::NotFound => DRIVER_NOT_FOUND.to_string(),
            SessionFailure::Transient => QUERY_FAILED.to_string(),
            other => other.message(),
        }
    }
}

impl From<ValidationError> for SessionFailure {
    fn from(error: ValidationError) -> Self {
        SessionFailure::Validation(error)
    }
}

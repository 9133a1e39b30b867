//! Error types
//!
//! Defines domain-specific error types for each part of the portal.

use std::fmt;
use std::io;
use std::time::Duration;

/// Input rejected locally, before any remote call is made
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyCivilId,
    IncompleteCivilId,
    EmptyAdminFields,
    EmptyQueryCivilId,
}

impl ValidationError {
    /// Text shown to the user next to the offending field
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::EmptyCivilId => "Please enter your Civil ID",
            ValidationError::IncompleteCivilId => "Civil ID must be 12 digits",
            ValidationError::EmptyAdminFields => "Please fill in all fields",
            ValidationError::EmptyQueryCivilId => "Please enter a Civil ID",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Remote document store errors
#[derive(Debug)]
pub enum StoreError {
    Unavailable(String),
    Timeout(Duration),
    Malformed {
        collection: String,
        key: String,
        reason: String,
    },
    Io(io::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable(msg) => write!(f, "Document store unavailable: {}", msg),
            StoreError::Timeout(after) => {
                write!(f, "Document store did not answer within {:?}", after)
            }
            StoreError::Malformed {
                collection,
                key,
                reason,
            } => write!(f, "Malformed document {}/{}: {}", collection, key, reason),
            StoreError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<io::Error> for StoreError {
    fn from(error: io::Error) -> Self {
        StoreError::Io(error)
    }
}

/// Local key-value persistence errors
#[derive(Debug)]
pub enum PersistenceError {
    Io(io::Error),
    Corrupt(String),
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::Io(e) => write!(f, "IO error: {}", e),
            PersistenceError::Corrupt(msg) => write!(f, "Corrupt key-value file: {}", msg),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<io::Error> for PersistenceError {
    fn from(error: io::Error) -> Self {
        PersistenceError::Io(error)
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(error: serde_json::Error) -> Self {
        PersistenceError::Corrupt(error.to_string())
    }
}

/// General portal error that encompasses all error types
#[derive(Debug)]
pub enum PortalError {
    Validation(ValidationError),
    Store(StoreError),
    Persistence(PersistenceError),
    Config(String),
}

impl fmt::Display for PortalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortalError::Validation(e) => write!(f, "Validation error: {}", e),
            PortalError::Store(e) => write!(f, "Store error: {}", e),
            PortalError::Persistence(e) => write!(f, "Persistence error: {}", e),
            PortalError::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for PortalError {}

impl From<ValidationError> for PortalError {
    fn from(error: ValidationError) -> Self {
        PortalError::Validation(error)
    }
}

impl From<StoreError> for PortalError {
    fn from(error: StoreError) -> Self {
        PortalError::Store(error)
    }
}

impl From<PersistenceError> for PortalError {
    fn from(error: PersistenceError) -> Self {
        PortalError::Persistence(error)
    }
}

impl From<config::ConfigError> for PortalError {
    fn from(error: config::ConfigError) -> Self {
        PortalError::Config(error.to_string())
    }
}

//! Admin authentication result types

use crate::error::StoreError;

#[derive(Debug)]
pub enum AdminAuthOutcome {
    Success { username: String },
    /// Unknown username or wrong password; the two are not distinguished
    InvalidCredentials,
    TransientError(StoreError),
}

//! Error handlers
//!
//! User-facing messages and logging for failures that reach the screens.

use crate::error::types::PortalError;
use log::{error, warn};

pub const INVALID_CIVIL_ID: &str = "Invalid Civil ID";
pub const LOGIN_FAILED: &str = "Login failed. Please try again.";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const DRIVER_NOT_FOUND: &str = "No driver found with this Civil ID";
pub const QUERY_FAILED: &str = "Error fetching driver data";
pub const REQUEST_IN_FLIGHT: &str = "Please wait for the current request to finish";
pub const REQUEST_ABANDONED: &str = "Request cancelled";

/// Log an error according to its category.
///
/// Validation errors are user mistakes and are not logged.
pub fn handle_error(err: &PortalError) {
    match err {
        PortalError::Validation(_) => {}
        PortalError::Persistence(e) => warn!("Local persistence failed: {}", e),
        PortalError::Store(e) => error!("Remote store failure: {}", e),
        PortalError::Config(e) => error!("Configuration failure: {}", e),
    }
}

/// Convert an error to the message shown on the login screens.
///
/// Validation errors are shown as-is; every remote, local or configuration
/// failure collapses to the same generic text.
pub fn user_message(err: &PortalError) -> &'static str {
    match err {
        PortalError::Validation(e) => e.message(),
        PortalError::Store(_) | PortalError::Persistence(_) | PortalError::Config(_) => {
            LOGIN_FAILED
        }
    }
}

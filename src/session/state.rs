//! Session state
//!
//! Dashboard variants carry their record or username, so a dashboard can
//! never be active without one.

use crate::model::DriverRecord;
use std::fmt;

/// The four screens of the app; exactly one is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    DriverLogin,
    AdminLogin,
    DriverDashboard,
    AdminDashboard,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Screen::DriverLogin => "driver-login",
            Screen::AdminLogin => "admin-login",
            Screen::DriverDashboard => "driver-dashboard",
            Screen::AdminDashboard => "admin-dashboard",
        };
        f.write_str(name)
    }
}

/// Active screen together with the data it displays
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    #[default]
    DriverLogin,
    AdminLogin,
    DriverDashboard(DriverRecord),
    AdminDashboard {
        username: String,
    },
}

impl SessionState {
    pub fn screen(&self) -> Screen {
        match self {
            SessionState::DriverLogin => Screen::DriverLogin,
            SessionState::AdminLogin => Screen::AdminLogin,
            SessionState::DriverDashboard(_) => Screen::DriverDashboard,
            SessionState::AdminDashboard { .. } => Screen::AdminDashboard,
        }
    }

    pub fn current_record(&self) -> Option<&DriverRecord> {
        match self {
            SessionState::DriverDashboard(record) => Some(record),
            _ => None,
        }
    }

    pub fn admin_username(&self) -> Option<&str> {
        match self {
            SessionState::AdminDashboard { username } => Some(username),
            _ => None,
        }
    }
}

/// Point-in-time copy of the session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub state: SessionState,
    /// A submission is in flight and re-submission is disabled
    pub busy: bool,
}

/// Initial contents of the driver login form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverLoginForm {
    pub civil_id: String,
    /// "Remember me" is pre-checked when an identifier was remembered
    pub remember: bool,
}

impl DriverLoginForm {
    /// Whether the login button is enabled for the current input
    pub fn can_submit(&self) -> bool {
        crate::validate::is_complete(&self.civil_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_driver_login() {
        let state = SessionState::default();
        assert_eq!(state.screen(), Screen::DriverLogin);
        assert!(state.current_record().is_none());
        assert!(state.admin_username().is_none());
    }

    #[test]
    fn test_dashboards_carry_their_data() {
        let record = DriverRecord {
            driver_name: "Ali".into(),
            ..Default::default()
        };
        let state = SessionState::DriverDashboard(record);
        assert_eq!(state.screen(), Screen::DriverDashboard);
        assert_eq!(state.current_record().unwrap().driver_name, "Ali");

        let state = SessionState::AdminDashboard {
            username: "admin1".into(),
        };
        assert_eq!(state.admin_username(), Some("admin1"));
        assert!(state.current_record().is_none());
    }

    #[test]
    fn test_form_can_submit_only_when_complete() {
        let mut form = DriverLoginForm::default();
        assert!(!form.can_submit());
        form.civil_id = "12345678901".into();
        assert!(!form.can_submit());
        form.civil_id = "123456789012".into();
        assert!(form.can_submit());
    }

    #[test]
    fn test_screen_names() {
        assert_eq!(Screen::AdminDashboard.to_string(), "admin-dashboard");
        assert_eq!(Screen::DriverLogin.to_string(), "driver-login");
    }
}

//! Text rendering of the active screen

use crate::dashboard::{render_admin_dashboard, render_driver_dashboard};
use crate::session::{DriverLoginForm, SessionSnapshot, SessionState};
use std::fmt::Write;

pub fn render_screen(snapshot: &SessionSnapshot, form: &DriverLoginForm) -> String {
    let mut out = String::new();
    match &snapshot.state {
        SessionState::DriverLogin => {
            let _ = writeln!(out, "== Driver Login ==");
            if !form.civil_id.is_empty() {
                let _ = writeln!(
                    out,
                    "Civil ID: {}{}",
                    form.civil_id,
                    if form.remember { " (remembered)" } else { "" }
                );
            }
            let _ = write!(out, "LOGIN <civil-id> [REMEMBER] | ADMIN | HELP | QUIT");
        }
        SessionState::AdminLogin => {
            let _ = writeln!(out, "== Admin Login ==");
            let _ = write!(out, "AUTH <username> <password> | BACK");
        }
        SessionState::DriverDashboard(record) => {
            let _ = writeln!(out, "== Dashboard ==");
            let _ = writeln!(out, "{}", render_driver_dashboard(record));
            let _ = write!(out, "LOGOUT");
        }
        SessionState::AdminDashboard { username } => {
            let _ = writeln!(out, "== Admin Dashboard ==");
            let _ = writeln!(out, "{}", render_admin_dashboard(username));
            let _ = write!(out, "QUERY <civil-id> | LOGOUT");
        }
    }
    out
}

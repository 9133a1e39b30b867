//! Session management
//!
//! Holds which screen is active and the record or username it shows, and
//! drives the transitions between screens.

mod controller;
mod results;
mod state;

pub use controller::SessionController;
pub use results::{AdminLoginResult, DriverLoginResult, SessionFailure};
pub use state::{DriverLoginForm, Screen, SessionSnapshot, SessionState};

//! Driver portal client
//!
//! Authenticates drivers by civil ID and administrators by username and
//! password against a read-only document store, remembers the last civil ID
//! on the device and renders the fetched performance record.

pub mod admin;
pub mod app;
pub mod config;
pub mod console;
pub mod dashboard;
pub mod error;
pub mod lookup;
pub mod model;
pub mod persistence;
pub mod session;
pub mod store;
pub mod utils;
pub mod validate;

pub use app::build_controller;
pub use config::AppConfig;
pub use session::SessionController;

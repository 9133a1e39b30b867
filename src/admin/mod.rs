//! Administrator authentication
//!
//! Fetches the admin document keyed by username and compares the stored
//! plaintext password. This mirrors the backend's existing scheme and is not
//! a sound design: no hashing, no salting, no rate limiting.

mod operations;
mod results;

pub use operations::AdminAuthService;
pub use results::AdminAuthOutcome;

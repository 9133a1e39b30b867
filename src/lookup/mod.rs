//! Driver record lookup
//!
//! Finds the performance record matching a civil ID in the drivers
//! collection.

mod operations;
mod results;

pub use operations::RecordLookupService;
pub use results::LookupOutcome;

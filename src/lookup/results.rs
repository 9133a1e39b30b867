//! Result types for lookup operations

use crate::error::StoreError;
use crate::model::DriverRecord;

/// Outcome of a single civil ID lookup
#[derive(Debug)]
pub enum LookupOutcome {
    Found(DriverRecord),
    /// The store answered but no document matched
    NotFound,
    /// The store could not be queried or returned an unreadable document
    TransientError(StoreError),
}

//! Input validation
//!
//! Normalizes and validates identifiers typed by the user before any remote
//! call is attempted.

mod civil_id;

pub use civil_id::{
    CIVIL_ID_LENGTH, is_complete, normalize, validate_admin_fields, validate_civil_id,
    validate_query_civil_id,
};

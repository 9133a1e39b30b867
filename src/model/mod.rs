//! Records fetched from the document store

mod admin;
mod driver;

pub use admin::AdminCredential;
pub use driver::DriverRecord;

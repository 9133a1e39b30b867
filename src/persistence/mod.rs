//! On-device persistence
//!
//! A narrow key-value capability plus the single-slot credential store
//! built on top of it.

mod credentials;
mod file;
mod kv;
mod memory;

pub use credentials::CredentialStore;
pub use file::FileKeyValueStore;
pub use kv::KeyValueStore;
pub use memory::MemoryKeyValueStore;

//! Remote document store
//!
//! The portal only reads from the store: an equality query over a
//! collection and a fetch by document key.

mod document;
mod memory;
mod remote;

pub use document::Document;
pub use memory::MemoryDocumentStore;
pub use remote::DocumentStore;

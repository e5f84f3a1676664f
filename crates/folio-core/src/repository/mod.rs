//! Repository Layer
//!
//! Store abstractions, the typed repository built on them, and an in-memory
//! store used by tests and offline previews.

mod memory;
mod query;
mod records;
mod traits;

#[cfg(test)]
mod tests;

pub use memory::MemoryStore;
pub use query::{Direction, FieldFilter, Query};
pub use records::Repository;
pub use traits::{DocumentReader, DocumentWriter};

// Storage backends for training example corpora.
// Scope narrowing happens at the backend; all other filter semantics
// live in Selector so every backend matches identically.

mod error;
mod memory;
mod selector;
mod sqlite;
mod store;

// Public API
pub use error::{Error, Result};
pub use memory::MemoryStore;
pub use selector::{Selector, SortKey, SortSpec};
pub use sqlite::SqliteStore;
pub use store::ExampleStore;

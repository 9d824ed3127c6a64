//! Persistence Adapters
//!
//! Implementations of the domain gateway traits.

mod in_memory;

pub use in_memory::InMemoryStore;

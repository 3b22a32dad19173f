//! Storage implementations for different backends

pub mod file;
pub mod in_memory;

pub use file::FileStorage;
pub use in_memory::InMemoryStorage;

//! Storage trait behind every entity store

use anyhow::Result;

/// Client-scoped key-value persistence.
///
/// Each key names one slot holding a serialized JSON document. Writes
/// replace the whole slot: after `set` returns `Ok` the new value is
/// visible, and on error the previous value is retained.
///
/// The entity stores are agnostic to the backend; see
/// [`crate::storage`] for the provided implementations.
pub trait Storage: Send + Sync {
    /// Read a slot, `None` if it has never been written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite a slot
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a slot; removing an absent slot is not an error
    fn remove(&self, key: &str) -> Result<()>;

    /// All keys currently holding a value, sorted
    fn keys(&self) -> Result<Vec<String>>;
}

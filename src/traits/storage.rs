//! Local key/value storage abstraction.
//!
//! Values are opaque strings; callers serialize their own JSON. Writes go
//! through immediately so a crash never loses an acknowledged update.

/// Storage operation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed
    #[error("Storage IO error: {0}")]
    Io(String),
    /// The backing file holds something other than a string map
    #[error("Storage serialization error: {0}")]
    Serialization(String),
}

/// Synchronous key/value store.
///
/// Called from the UI task only, so operations are blocking and small.
pub trait KeyValueStore: Send + Sync {
    /// Read a value. `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a value. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

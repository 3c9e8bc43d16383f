//! In-memory key/value store for testing.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::traits::{KeyValueStore, StorageError};

/// Key/value store kept in memory, with switchable failures.
///
/// Clones share the same underlying map, so a test can keep a handle while
/// the app owns another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    values: Arc<Mutex<HashMap<String, String>>>,
    /// Whether reads should fail
    get_should_fail: Arc<Mutex<bool>>,
    /// Whether writes and removals should fail
    set_should_fail: Arc<Mutex<bool>>,
}

impl InMemoryStorage {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `entries`.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let storage = Self::new();
        {
            let mut values = storage.values.lock().unwrap_or_else(PoisonError::into_inner);
            for (key, value) in entries {
                values.insert(key.to_string(), value.to_string());
            }
        }
        storage
    }

    /// Configure whether reads should fail.
    pub fn set_get_should_fail(&self, should_fail: bool) {
        *self
            .get_should_fail
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = should_fail;
    }

    /// Configure whether writes should fail.
    pub fn set_set_should_fail(&self, should_fail: bool) {
        *self
            .set_should_fail
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = should_fail;
    }

    /// Snapshot of a value, bypassing failure flags.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn flag(flag: &Mutex<bool>) -> bool {
        *flag.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl KeyValueStore for InMemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if Self::flag(&self.get_should_fail) {
            return Err(StorageError::Io("Mock get failure".to_string()));
        }
        Ok(self.peek(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if Self::flag(&self.set_should_fail) {
            return Err(StorageError::Io("Mock set failure".to_string()));
        }
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if Self::flag(&self.set_should_fail) {
            return Err(StorageError::Io("Mock remove failure".to_string()));
        }
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_values() {
        let storage = InMemoryStorage::new();
        let handle = storage.clone();
        storage.set("favorites", "[]").unwrap();
        assert_eq!(handle.peek("favorites").as_deref(), Some("[]"));
    }

    #[test]
    fn test_failure_flags() {
        let storage = InMemoryStorage::with_entries([("route", "/signup")]);
        storage.set_get_should_fail(true);
        assert!(storage.get("route").is_err());
        storage.set_get_should_fail(false);
        assert_eq!(storage.get("route").unwrap().as_deref(), Some("/signup"));

        storage.set_set_should_fail(true);
        assert!(storage.set("route", "/login").is_err());
        assert!(storage.remove("route").is_err());
        assert_eq!(storage.peek("route").as_deref(), Some("/signup"));
    }
}

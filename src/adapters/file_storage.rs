//! JSON-file backed key/value storage.
//!
//! All keys live in one pretty-printed JSON object, rewritten on every
//! mutation. Reads always go to disk so external edits are picked up.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::traits::{KeyValueStore, StorageError};

/// Name of the storage file inside the data directory.
pub const STORAGE_FILE: &str = "storage.json";

type StorageMap = BTreeMap<String, String>;

/// Key/value store persisted to `<data_dir>/storage.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Store backed by `storage.json` inside `data_dir`.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(STORAGE_FILE),
        }
    }

    /// Get the path to the storage file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<StorageMap, StorageError> {
        if !self.path.exists() {
            return Ok(StorageMap::new());
        }

        let file = File::open(&self.path).map_err(|e| StorageError::Io(e.to_string()))?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| StorageError::Serialization(e.to_string()))
    }

    fn write_map(&self, map: &StorageMap) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| StorageError::Io(e.to_string()))?;
            }
        }

        let file = File::create(&self.path).map_err(|e| StorageError::Io(e.to_string()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, map)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        writer.flush().map_err(|e| StorageError::Io(e.to_string()))
    }
}

impl KeyValueStore for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_map()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // A corrupt file is replaced rather than blocking every later write.
        let mut map = self.read_map().unwrap_or_else(|err| {
            tracing::warn!("Discarding unreadable storage file: {}", err);
            StorageMap::new()
        });
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut map = self.read_map()?;
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}

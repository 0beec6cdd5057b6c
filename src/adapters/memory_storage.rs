//! In-memory storage adapter.
//!
//! Implements [`StoragePort`] over a `HashMap`.  Stands in for
//! `localStorage` in headless runs and tests; [`MemoryStorage::unavailable`]
//! models a browser with storage disabled (private mode, sandboxed frame).

use std::collections::HashMap;

use log::debug;

use crate::app::ports::{StorageError, StoragePort};

#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    disabled: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that refuses every read and write.
    pub fn unavailable() -> Self {
        Self {
            entries: HashMap::new(),
            disabled: true,
        }
    }

    /// Pre-seeded storage, e.g. a preference saved by a previous visit.
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_owned(), value.to_owned());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StoragePort for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.disabled {
            return Err(StorageError::Unavailable);
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.disabled {
            return Err(StorageError::Unavailable);
        }
        debug!("MemoryStorage: {key}={value}");
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.disabled {
            return Err(StorageError::Unavailable);
        }
        self.entries.remove(key);
        Ok(())
    }
}

use std::collections::HashMap;

use super::{Storage, StorageOp};
use crate::error::StorageError;

/// In-memory storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }

    fn apply(&mut self, ops: &[StorageOp<'_>]) -> Result<(), StorageError> {
        for op in ops {
            match *op {
                StorageOp::Set(key, value) => self.entries.insert(key.to_owned(), value.to_owned()),
                StorageOp::Remove(key) => self.entries.remove(key),
            };
        }
        Ok(())
    }
}

//! Key-value storage for session persistence.
//!
//! The session layer needs exactly three operations over string keys and
//! string values. Two backends are provided:
//!
//! - [`MemoryStorage`]: a map, for tests and ephemeral sessions
//! - [`RedbStorage`]: a single-table redb file, for the console binary
//!
//! Writes are synchronous: when `set`, `remove` or `apply` returns `Ok`, the
//! change is durable (for redb, the write transaction has committed).
//! `apply` is atomic: on error none of its operations took effect.

mod disk;
mod memory;

pub use disk::RedbStorage;
pub use memory::MemoryStorage;

use crate::error::StorageError;

/// Persistent key-value storage.
pub trait Storage {
    /// Read the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;

    /// Apply every operation in `ops`, or none of them.
    fn apply(&mut self, ops: &[StorageOp<'_>]) -> Result<(), StorageError>;
}

/// One change inside a [`Storage::apply`] batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageOp<'a> {
    /// Store a value under a key.
    Set(&'a str, &'a str),
    /// Delete a key.
    Remove(&'a str),
}

impl<S: Storage + ?Sized> Storage for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }

    fn apply(&mut self, ops: &[StorageOp<'_>]) -> Result<(), StorageError> {
        (**self).apply(ops)
    }
}

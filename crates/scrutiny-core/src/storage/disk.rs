use std::path::Path;

use redb::{Database, ReadableTable, TableDefinition};

use super::{Storage, StorageOp};
use crate::error::StorageError;

const SESSION_TABLE: TableDefinition<&str, &str> = TableDefinition::new("session");

/// File-backed storage using redb.
///
/// Every `set`/`remove` runs in its own write transaction, so each call is
/// durable on return. An `apply` batch shares one transaction.
pub struct RedbStorage {
    db: Database,
}

impl std::fmt::Debug for RedbStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedbStorage").finish_non_exhaustive()
    }
}

impl RedbStorage {
    /// Open the database at `path`, creating it if it doesn't exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let db = Database::create(path).map_err(|e| StorageError::Database(e.to_string()))?;
        tracing::debug!(path = %path.display(), "opened session store");
        Ok(Self { db })
    }
}

impl Storage for RedbStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let read_txn = self.db.begin_read().map_err(|e| StorageError::Database(e.to_string()))?;
        let table = match read_txn.open_table(SESSION_TABLE) {
            Ok(table) => table,
            // Nothing has been written yet.
            Err(redb::TableError::TableDoesNotExist(_)) => return Ok(None),
            Err(e) => return Err(StorageError::Database(e.to_string())),
        };
        let entry = table.get(key).map_err(|e| StorageError::Database(e.to_string()))?;
        Ok(entry.map(|value| value.value().to_owned()))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.apply(&[StorageOp::Set(key, value)])
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.apply(&[StorageOp::Remove(key)])
    }

    fn apply(&mut self, ops: &[StorageOp<'_>]) -> Result<(), StorageError> {
        let write_txn = self.db.begin_write().map_err(|e| StorageError::Database(e.to_string()))?;
        {
            let mut table = write_txn
                .open_table(SESSION_TABLE)
                .map_err(|e| StorageError::Database(e.to_string()))?;
            for op in ops {
                match *op {
                    StorageOp::Set(key, value) => table.insert(key, value).map(drop),
                    StorageOp::Remove(key) => table.remove(key).map(drop),
                }
                .map_err(|e| StorageError::Database(e.to_string()))?;
            }
        }
        // Dropping an uncommitted transaction aborts it.
        write_txn.commit().map_err(|e| StorageError::Database(e.to_string()))?;
        Ok(())
    }
}

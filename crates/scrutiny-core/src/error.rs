//! Error types for the core state machines.

use thiserror::Error;

use crate::confirm::ConfirmationState;

/// Persistent storage failures.
///
/// The session layer never retries or hides these; they are returned to
/// whoever mutated the session.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying database rejected the operation.
    #[error("storage database error: {0}")]
    Database(String),

    /// Filesystem failure while opening the store.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Confirmation modal errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfirmError {
    /// Operation not valid in the modal's current state.
    #[error("cannot {operation} confirmation while {state:?}")]
    InvalidState {
        /// State the modal was in.
        state: ConfirmationState,
        /// Operation that was attempted.
        operation: String,
    },
}

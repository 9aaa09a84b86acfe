//! Console errors.

use scrutiny_app::RuntimeError;
use scrutiny_client::ApiError;
use scrutiny_core::StorageError;
use thiserror::Error;

use crate::terminal::TerminalError;

/// Errors that end the console.
#[derive(Debug, Error)]
pub enum CliError {
    /// The session store couldn't be opened or read.
    #[error("session store: {0}")]
    Storage(#[from] StorageError),

    /// The HTTP client couldn't be built.
    #[error("http client: {0}")]
    Client(#[from] ApiError),

    /// The runtime stopped with an error.
    #[error(transparent)]
    Runtime(#[from] RuntimeError<TerminalError>),

    /// The async runtime couldn't start.
    #[error("async runtime: {0}")]
    Io(#[from] std::io::Error),
}

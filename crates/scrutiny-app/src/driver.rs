//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the application runtime from the terminal.
//! The console binary implements it over stdin/stdout; tests implement it
//! with scripted input and a virtual clock. The generic [`crate::Runtime`]
//! handles all orchestration.

use std::{future::Future, ops::Sub, time::Duration};

use scrutiny_core::Storage;

use crate::{App, AppEvent};

/// Abstracts I/O operations for the application runtime.
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Time instant type. Enables virtual time in tests.
    type Instant: Copy + Ord + Send + Sync + Sub<Output = Duration>;

    /// Wait for input and return the events it produced.
    ///
    /// Returns an empty vector if the input produced no events.
    fn poll_event(&mut self) -> impl Future<Output = Result<Vec<AppEvent>, Self::Error>> + Send;

    /// Current time instant.
    fn now(&self) -> Self::Instant;

    /// Render the application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the output can't be written.
    fn render<S: Storage>(&mut self, app: &App<S>) -> Result<(), Self::Error>;

    /// Release resources before the runtime returns.
    fn stop(&mut self);
}

//! Application actions
//!
//! Produced by [`crate::App::handle`] for the runtime to execute.

/// Output of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Redraw.
    Render,

    /// Stop the runtime.
    Quit,
}

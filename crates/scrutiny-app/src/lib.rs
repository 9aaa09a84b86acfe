//! Application layer for the Scrutiny console
//!
//! Page routing, view state and a generic runtime, independent of the
//! terminal, so integration tests drive the same code the binary runs.
//!
//! # Components
//!
//! - [`App`]: Application state (session, page, listings, modal, notifications)
//! - [`Navigator`]: Guarded page transitions
//! - [`NotificationCenter`]: On-screen notification queue
//! - [`Driver`]: Trait for platform-specific I/O abstraction
//! - [`Runtime`]: Generic orchestration loop using Driver

mod action;
mod app;
mod driver;
mod event;
mod navigator;
mod notifications;
mod routes;
mod runtime;

pub use action::AppAction;
pub use app::{
    App, BACKUPS_DELETED, BACKUPS_RESTORED, CONFIGS_RESET, Confirmation, Refresh,
    SUGGESTIONS_APPLIED,
};
pub use driver::Driver;
pub use event::AppEvent;
pub use navigator::{Navigation, Navigator};
pub use notifications::NotificationCenter;
pub use routes::Route;
pub use runtime::{Runtime, RuntimeError};

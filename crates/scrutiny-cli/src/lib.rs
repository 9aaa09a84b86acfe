//! Terminal console for Scrutiny
//!
//! A thin shell over [`scrutiny_app::Driver`] that provides line-oriented
//! terminal I/O. All orchestration logic lives in the generic
//! [`scrutiny_app::Runtime`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod commands;
pub mod config;
pub mod error;
pub mod terminal;
pub mod view;

pub use commands::Command;
pub use config::Args;
pub use error::CliError;
pub use scrutiny_app::{App, AppAction, AppEvent, Driver, Runtime};
pub use terminal::{TerminalDriver, TerminalError};

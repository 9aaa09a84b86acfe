//! Scrutiny console core logic
//!
//! The client-side layer that sits between the console's views and the
//! backend: who the user is, how to reach their server, which pages they may
//! open, and how destructive operations are confirmed and reported.
//!
//! # Architecture
//!
//! Everything here is a small state machine or a pure function. Nothing in
//! this crate performs network I/O. Persistence goes through the [`Storage`]
//! trait, user feedback through the [`NotificationSink`] trait, and the one
//! asynchronous effect (a confirmed destructive action) is supplied by the
//! caller as a boxed future.
//!
//! The same code therefore runs in the terminal console, in integration tests
//! against an in-memory store, and under property tests.
//!
//! # Components
//!
//! - [`connection`]: base address derivation from a server identifier
//! - [`session`]: credential and server identity with write-through storage
//! - [`storage`]: key-value storage trait plus memory and redb backends
//! - [`route`]: navigation guard
//! - [`notify`]: success/failure feedback bridge
//! - [`confirm`]: confirmation modal state machine
//! - [`error`]: error types

pub mod confirm;
pub mod connection;
pub mod error;
pub mod notify;
pub mod route;
pub mod session;
pub mod storage;

pub use confirm::{ActionOutcome, ConfirmationFlow, ConfirmationRequest, ConfirmationState, DeferredAction};
pub use connection::{ConnectionConfig, Protocol};
pub use error::{ConfirmError, StorageError};
pub use notify::{
    FailureReport, NotificationBridge, NotificationConfig, NotificationKind, NotificationRecord,
    NotificationSink,
};
pub use route::{RouteDecision, RouteGuard, RouteMeta};
pub use session::SessionState;
pub use storage::{MemoryStorage, RedbStorage, Storage, StorageOp};

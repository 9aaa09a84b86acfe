//! Wire format for the Scrutiny backend REST API.
//!
//! Every endpoint lives under `/api` on the backend and exchanges JSON. This
//! crate only describes the shapes of those bodies; building requests and
//! interpreting status codes is the job of `scrutiny-client`.
//!
//! Field names follow the backend exactly (`snake_case` for most bodies,
//! `PascalCase` for configuration checks, `type` for diff lines), so these
//! types decode straight from a raw response body.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod auth;
pub mod backup;
pub mod error;
pub mod resource;

pub use auth::{LoginRequest, LoginSuccessResponse};
pub use backup::{BackupFile, FileDiffLine, FileDiffLineType, FileDiffResponse};
pub use error::ErrorMessage;
pub use resource::{ResourceConfig, ResourceConfigMap, ResourceConfigPatch};

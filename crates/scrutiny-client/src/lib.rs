//! Scrutiny backend REST client
//!
//! Typed access to the backend's `/api` routes. Callers hold a
//! [`Backend`] trait object; [`ApiClient`] is the reqwest implementation.
//! Every call takes an [`Endpoint`] built from the current session, so the
//! address and bearer token always reflect the latest login.
//!
//! Failures come back as [`ApiError`], which implements
//! [`scrutiny_core::FailureReport`] and can be handed straight to a
//! notification bridge.

mod backend;
mod endpoint;
mod error;
mod http;

pub use backend::Backend;
pub use endpoint::Endpoint;
pub use error::ApiError;
pub use http::{ApiClient, DEFAULT_TIMEOUT};

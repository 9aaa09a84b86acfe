//! Login payloads.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/login`.
///
/// The backend only accepts the name of its main application user; any other
/// name is rejected with an [`crate::ErrorMessage`] before the password is
/// looked at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Application user name.
    pub name: String,
    /// Application user password.
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginSuccessResponse {
    /// Bearer token to send on every protected request.
    pub token: String,
}

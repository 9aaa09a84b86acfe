//! The backend seam.
//!
//! Everything above this crate talks to the server through [`Backend`], so
//! the application layer runs unchanged against [`crate::ApiClient`] or an
//! in-memory fake.

use async_trait::async_trait;
use scrutiny_proto::{
    BackupFile, FileDiffResponse, LoginRequest, LoginSuccessResponse, ResourceConfig,
    ResourceConfigPatch,
};

use crate::{endpoint::Endpoint, error::ApiError};

/// Operations offered by the Scrutiny backend.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Exchange credentials for a token.
    async fn login(
        &self,
        endpoint: &Endpoint,
        request: &LoginRequest,
    ) -> Result<LoginSuccessResponse, ApiError>;

    /// List configuration backups.
    async fn list_backups(&self, endpoint: &Endpoint) -> Result<Vec<BackupFile>, ApiError>;

    /// Delete every backup.
    async fn delete_backups(&self, endpoint: &Endpoint) -> Result<(), ApiError>;

    /// Delete one backup.
    async fn delete_backup(&self, endpoint: &Endpoint, name: &str) -> Result<(), ApiError>;

    /// Replace the live configuration with a backup and reload.
    async fn restore_backup(&self, endpoint: &Endpoint, name: &str) -> Result<(), ApiError>;

    /// Line diff between a backup and the live configuration.
    async fn file_diff(&self, endpoint: &Endpoint, name: &str)
    -> Result<FileDiffResponse, ApiError>;

    /// Run the configuration checks, ordered by setting name.
    async fn resource_configs(&self, endpoint: &Endpoint) -> Result<Vec<ResourceConfig>, ApiError>;

    /// Apply suggested values.
    async fn apply_suggestions(
        &self,
        endpoint: &Endpoint,
        patches: &[ResourceConfigPatch],
    ) -> Result<(), ApiError>;

    /// Discard applied configuration changes.
    async fn reset_configs(&self, endpoint: &Endpoint) -> Result<(), ApiError>;
}

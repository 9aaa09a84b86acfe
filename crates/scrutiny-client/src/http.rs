//! reqwest implementation of [`Backend`].
//!
//! # Status handling
//!
//! Any 2xx is success (the backend answers most calls with `202 Accepted`).
//! For anything else the body is searched for `{ "error_message": ... }`:
//!
//! ```text
//! 401 with message              -> ApiError::Authentication
//! 400 from /login with message  -> ApiError::Authentication
//! everything else               -> ApiError::Server { status, message }
//! ```
//!
//! Backup names are appended as one percent-encoded path segment, so a name
//! can never address another route.
//!
//! The resource routes report errors as `{ "error": ... }`, which carries no
//! `error_message`, so those failures reach the user as the generic message.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Url};
use scrutiny_proto::{
    BackupFile, ErrorMessage, FileDiffResponse, LoginRequest, LoginSuccessResponse,
    ResourceConfig, ResourceConfigMap, ResourceConfigPatch,
};
use serde::de::DeserializeOwned;

use crate::{backend::Backend, endpoint::Endpoint, error::ApiError};

const LOGIN_ROUTE: &str = "/login";
const BACKUP_ROUTE: &str = "/backup";
const FILE_DIFF_ROUTE: &str = "/file-diff";
const RESOURCE_ROUTE: &str = "/resource";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the Scrutiny backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
}

impl ApiClient {
    /// Create a client with [`DEFAULT_TIMEOUT`].
    pub fn new() -> Result<Self, ApiError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom per-request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, ApiError> {
        let http = Client::builder().timeout(timeout).build().map_err(ApiError::Network)?;
        Ok(Self { http })
    }

    fn request(&self, method: Method, endpoint: &Endpoint, url: Url) -> RequestBuilder {
        let builder = self.http.request(method, url);
        if endpoint.token.is_empty() { builder } else { builder.bearer_auth(&endpoint.token) }
    }

    async fn send(&self, builder: RequestBuilder, route: &str) -> Result<Vec<u8>, ApiError> {
        let response = builder.send().await.map_err(|e| {
            tracing::warn!(route, error = %e, "backend unreachable");
            ApiError::Network(e)
        })?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(ApiError::Network)?;

        if (200..300).contains(&status) {
            tracing::debug!(route, status, "backend call succeeded");
            return Ok(body.to_vec());
        }

        let message = ErrorMessage::from_body(&body);
        tracing::warn!(route, status, message = ?message, "backend call failed");
        Err(classify(status, route, message))
    }
}

fn classify(status: u16, route: &str, message: Option<String>) -> ApiError {
    match (status, message) {
        (401, Some(message)) => ApiError::Authentication { message },
        (400, Some(message)) if route == LOGIN_ROUTE => ApiError::Authentication { message },
        (status, message) => ApiError::Server { status, message },
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(ApiError::Decode)
}

#[async_trait]
impl Backend for ApiClient {
    async fn login(
        &self,
        endpoint: &Endpoint,
        request: &LoginRequest,
    ) -> Result<LoginSuccessResponse, ApiError> {
        let builder = self.request(Method::POST, endpoint, endpoint.url(LOGIN_ROUTE)?).json(request);
        decode(&self.send(builder, LOGIN_ROUTE).await?)
    }

    async fn list_backups(&self, endpoint: &Endpoint) -> Result<Vec<BackupFile>, ApiError> {
        let builder = self.request(Method::GET, endpoint, endpoint.url(BACKUP_ROUTE)?);
        decode(&self.send(builder, BACKUP_ROUTE).await?)
    }

    async fn delete_backups(&self, endpoint: &Endpoint) -> Result<(), ApiError> {
        let builder = self.request(Method::DELETE, endpoint, endpoint.url(BACKUP_ROUTE)?);
        self.send(builder, BACKUP_ROUTE).await?;
        Ok(())
    }

    async fn delete_backup(&self, endpoint: &Endpoint, name: &str) -> Result<(), ApiError> {
        let url = endpoint.item_url(BACKUP_ROUTE, name)?;
        let builder = self.request(Method::DELETE, endpoint, url);
        self.send(builder, BACKUP_ROUTE).await?;
        Ok(())
    }

    async fn restore_backup(&self, endpoint: &Endpoint, name: &str) -> Result<(), ApiError> {
        let url = endpoint.item_url(BACKUP_ROUTE, name)?;
        let builder = self.request(Method::PUT, endpoint, url);
        self.send(builder, BACKUP_ROUTE).await?;
        Ok(())
    }

    async fn file_diff(
        &self,
        endpoint: &Endpoint,
        name: &str,
    ) -> Result<FileDiffResponse, ApiError> {
        let url = endpoint.item_url(FILE_DIFF_ROUTE, name)?;
        let builder = self.request(Method::GET, endpoint, url);
        decode(&self.send(builder, FILE_DIFF_ROUTE).await?)
    }

    async fn resource_configs(&self, endpoint: &Endpoint) -> Result<Vec<ResourceConfig>, ApiError> {
        let builder = self.request(Method::GET, endpoint, endpoint.url(RESOURCE_ROUTE)?);
        let configs: ResourceConfigMap = decode(&self.send(builder, RESOURCE_ROUTE).await?)?;
        Ok(configs.into_values().collect())
    }

    async fn apply_suggestions(
        &self,
        endpoint: &Endpoint,
        patches: &[ResourceConfigPatch],
    ) -> Result<(), ApiError> {
        let builder = self.request(Method::PATCH, endpoint, endpoint.url(RESOURCE_ROUTE)?).json(patches);
        self.send(builder, RESOURCE_ROUTE).await?;
        Ok(())
    }

    async fn reset_configs(&self, endpoint: &Endpoint) -> Result<(), ApiError> {
        let builder = self.request(Method::DELETE, endpoint, endpoint.url(RESOURCE_ROUTE)?);
        self.send(builder, RESOURCE_ROUTE).await?;
        Ok(())
    }
}

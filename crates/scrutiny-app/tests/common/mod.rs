//! In-memory backend shared by the app integration tests.

#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use scrutiny_app::App;
use scrutiny_client::{ApiError, Backend, Endpoint};
use scrutiny_core::{ConnectionConfig, MemoryStorage, NotificationConfig, SessionState};
use scrutiny_proto::{
    BackupFile, FileDiffLine, FileDiffLineType, FileDiffResponse, LoginRequest,
    LoginSuccessResponse, ResourceConfig, ResourceConfigPatch,
};

pub const TOKEN: &str = "tok-1";
pub const USER: &str = "postgres";
pub const PASSWORD: &str = "secret";
pub const WRONG_USER: &str = "Username should be the name of our main application user";

#[derive(Debug, Default)]
pub struct FakeState {
    pub backups: Vec<String>,
    pub checks: Vec<ResourceConfig>,
    pub applied: Vec<ResourceConfigPatch>,
    pub endpoints: Vec<Endpoint>,
    pub fail_next: Option<ApiError>,
}

/// Backend that keeps everything in memory and counts destructive calls.
#[derive(Debug, Default)]
pub struct FakeBackend {
    pub state: Mutex<FakeState>,
    pub destructive_calls: AtomicUsize,
}

impl FakeBackend {
    pub fn seeded() -> Arc<Self> {
        let backend = Self::default();
        {
            let mut state = backend.state.lock().unwrap();
            state.backups = vec![
                "postgresql.auto.conf_1714557600".into(),
                "postgresql.auto.conf_1714644000".into(),
            ];
            state.checks = vec![
                check("huge_pages", "try", None),
                check("shared_buffers", "128MB", Some("1GB")),
                check("work_mem", "4MB", Some("8MB")),
            ];
        }
        Arc::new(backend)
    }

    pub fn destructive_calls(&self) -> usize {
        self.destructive_calls.load(Ordering::SeqCst)
    }

    pub fn fail_next(&self, error: ApiError) {
        self.state.lock().unwrap().fail_next = Some(error);
    }

    fn enter(&self, endpoint: &Endpoint) -> Result<std::sync::MutexGuard<'_, FakeState>, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.endpoints.push(endpoint.clone());
        if let Some(error) = state.fail_next.take() {
            return Err(error);
        }
        if endpoint.token != TOKEN {
            return Err(ApiError::Authentication { message: "Invalid token".into() });
        }
        Ok(state)
    }

    fn listing(state: &FakeState) -> Vec<BackupFile> {
        state
            .backups
            .iter()
            .map(|name| BackupFile { name: name.clone(), time: "2024-05-01 10:00:00".into(), diff: None })
            .collect()
    }
}

pub fn check(name: &str, value: &str, suggested: Option<&str>) -> ResourceConfig {
    ResourceConfig {
        name: Some(name.into()),
        value: Some(value.into()),
        suggested_value: suggested.map(Into::into),
        ..ResourceConfig::default()
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn login(
        &self,
        endpoint: &Endpoint,
        request: &LoginRequest,
    ) -> Result<LoginSuccessResponse, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.endpoints.push(endpoint.clone());
        if request.name != USER {
            return Err(ApiError::Authentication { message: WRONG_USER.into() });
        }
        if request.password != PASSWORD {
            return Err(ApiError::Authentication { message: "Incorrect user password".into() });
        }
        Ok(LoginSuccessResponse { token: TOKEN.into() })
    }

    async fn list_backups(&self, endpoint: &Endpoint) -> Result<Vec<BackupFile>, ApiError> {
        let state = self.enter(endpoint)?;
        Ok(Self::listing(&state))
    }

    async fn delete_backups(&self, endpoint: &Endpoint) -> Result<(), ApiError> {
        self.destructive_calls.fetch_add(1, Ordering::SeqCst);
        self.enter(endpoint)?.backups.clear();
        Ok(())
    }

    async fn delete_backup(&self, endpoint: &Endpoint, name: &str) -> Result<(), ApiError> {
        self.destructive_calls.fetch_add(1, Ordering::SeqCst);
        self.enter(endpoint)?.backups.retain(|b| b != name);
        Ok(())
    }

    async fn restore_backup(&self, endpoint: &Endpoint, name: &str) -> Result<(), ApiError> {
        self.destructive_calls.fetch_add(1, Ordering::SeqCst);
        let mut state = self.enter(endpoint)?;
        if !state.backups.iter().any(|b| b == name) {
            return Err(ApiError::Server { status: 500, message: Some(format!("{name} not found")) });
        }
        // Restoring replaces the backup with a fresh one of the current file.
        state.backups.retain(|b| b != name);
        state.backups.push("postgresql.auto.conf_1714730400".into());
        Ok(())
    }

    async fn file_diff(
        &self,
        endpoint: &Endpoint,
        name: &str,
    ) -> Result<FileDiffResponse, ApiError> {
        drop(self.enter(endpoint)?);
        Ok(FileDiffResponse {
            filename: name.into(),
            time: "2024-05-01 10:00:00".into(),
            diff: vec![FileDiffLine { line: "work_mem = '8MB'".into(), kind: FileDiffLineType::Delete }],
        })
    }

    async fn resource_configs(&self, endpoint: &Endpoint) -> Result<Vec<ResourceConfig>, ApiError> {
        Ok(self.enter(endpoint)?.checks.clone())
    }

    async fn apply_suggestions(
        &self,
        endpoint: &Endpoint,
        patches: &[ResourceConfigPatch],
    ) -> Result<(), ApiError> {
        let mut state = self.enter(endpoint)?;
        for patch in patches {
            if let Some(check) =
                state.checks.iter_mut().find(|c| c.name.as_deref() == Some(patch.name.as_str()))
            {
                check.value = Some(patch.suggested_value.clone());
                check.suggested_value = None;
            }
        }
        state.applied.extend_from_slice(patches);
        Ok(())
    }

    async fn reset_configs(&self, endpoint: &Endpoint) -> Result<(), ApiError> {
        self.destructive_calls.fetch_add(1, Ordering::SeqCst);
        let mut state = self.enter(endpoint)?;
        state.applied.clear();
        Ok(())
    }
}

pub fn app(backend: &Arc<FakeBackend>) -> App<MemoryStorage> {
    let session = SessionState::hydrate(MemoryStorage::new()).unwrap();
    App::new(
        session,
        ConnectionConfig::new(9090),
        NotificationConfig::default(),
        Arc::clone(backend) as Arc<dyn Backend>,
    )
}

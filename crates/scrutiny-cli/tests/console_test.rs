//! Console driver and rendering against a canned backend.
//!
//! Input is a byte script, output is captured in memory, so the full loop
//! from typed command to rendered frame runs without a terminal.

use std::sync::Arc;

use async_trait::async_trait;
use scrutiny_cli::{AppEvent, TerminalDriver, view};
use scrutiny_client::{ApiError, Backend, Endpoint};
use scrutiny_core::{ConnectionConfig, MemoryStorage, NotificationConfig, SessionState};
use scrutiny_proto::{
    BackupFile, FileDiffResponse, LoginRequest, LoginSuccessResponse, ResourceConfig,
    ResourceConfigPatch,
};

struct CannedBackend;

#[async_trait]
impl Backend for CannedBackend {
    async fn login(&self, _: &Endpoint, request: &LoginRequest) -> Result<LoginSuccessResponse, ApiError> {
        if request.name == "postgres" {
            Ok(LoginSuccessResponse { token: "tok".into() })
        } else {
            Err(ApiError::Authentication {
                message: "Username should be the name of our main application user".into(),
            })
        }
    }

    async fn list_backups(&self, _: &Endpoint) -> Result<Vec<BackupFile>, ApiError> {
        Ok(vec![BackupFile {
            name: "postgresql.auto.conf_1714557600".into(),
            time: "2024-05-01 10:00:00".into(),
            diff: None,
        }])
    }

    async fn delete_backups(&self, _: &Endpoint) -> Result<(), ApiError> {
        Ok(())
    }

    async fn delete_backup(&self, _: &Endpoint, _: &str) -> Result<(), ApiError> {
        Ok(())
    }

    async fn restore_backup(&self, _: &Endpoint, _: &str) -> Result<(), ApiError> {
        Ok(())
    }

    async fn file_diff(&self, _: &Endpoint, name: &str) -> Result<FileDiffResponse, ApiError> {
        Ok(FileDiffResponse { filename: name.into(), time: String::new(), diff: Vec::new() })
    }

    async fn resource_configs(&self, _: &Endpoint) -> Result<Vec<ResourceConfig>, ApiError> {
        Ok(vec![
            ResourceConfig {
                name: Some("huge_pages".into()),
                value: Some("try".into()),
                ..ResourceConfig::default()
            },
            ResourceConfig {
                name: Some("work_mem".into()),
                value: Some("4096".into()),
                unit: Some("kB".into()),
                suggested_value: Some("8192".into()),
                details: Some("Raise for sort-heavy workloads".into()),
                ..ResourceConfig::default()
            },
        ])
    }

    async fn apply_suggestions(&self, _: &Endpoint, _: &[ResourceConfigPatch]) -> Result<(), ApiError> {
        Ok(())
    }

    async fn reset_configs(&self, _: &Endpoint) -> Result<(), ApiError> {
        Ok(())
    }
}

fn app() -> scrutiny_cli::App<MemoryStorage> {
    scrutiny_cli::App::new(
        SessionState::hydrate(MemoryStorage::new()).unwrap(),
        ConnectionConfig::new(9090),
        NotificationConfig::default(),
        Arc::new(CannedBackend),
    )
}

fn frame(app: &scrutiny_cli::App<MemoryStorage>) -> String {
    let mut out = Vec::new();
    view::render(app, &mut out).unwrap();
    String::from_utf8(out).unwrap().trim_end().to_string()
}

#[tokio::test]
async fn configurations_frame() {
    let mut app = app();
    app.handle(AppEvent::Login {
        hostname: "10.0.0.5".into(),
        username: "postgres".into(),
        password: "secret".into(),
    })
    .await
    .unwrap();
    app.handle(AppEvent::Navigate { path: "/configurations".into() }).await.unwrap();
    app.handle(AppEvent::RunChecks).await.unwrap();

    insta::assert_snapshot!(frame(&app), @r"
== /configurations == postgres@10.0.0.5
Suggestions (1)
  work_mem                         4096 kB -> 8192 kB
      Raise for sort-heavy workloads
Checks that passed (1)
  huge_pages                       try
");
}

#[tokio::test]
async fn home_frame_shows_backend_address() {
    let mut app = app();
    app.handle(AppEvent::Login {
        hostname: "db.example.com".into(),
        username: "postgres".into(),
        password: "secret".into(),
    })
    .await
    .unwrap();

    insta::assert_snapshot!(frame(&app), @r"
== / == postgres@db.example.com
Backend: https://db.example.com:9090/api
Pages: /configurations /backups /docs /about
");
}

#[tokio::test]
async fn scripted_session() {
    let script = b"/login 10.0.0.5 postgres secret\n\
/go /backups\n\
/backups\n\
/delete-all\n\
/no\n\
/bogus\n\
/go backups\n\
/quit\n";
    let driver = TerminalDriver::new(&script[..], Vec::new());

    let mut runtime = scrutiny_cli::Runtime::new(driver, app());
    runtime.run().await.unwrap();

    let output = String::from_utf8(runtime.driver().output().clone()).unwrap();
    assert!(output.contains("== /login == not logged in"));
    assert!(output.contains("== /backups == postgres@10.0.0.5"));
    assert!(output.contains("  postgresql.auto.conf_1714557600  2024-05-01 10:00:00"));
    assert!(output.contains("[?] Delete backups: Delete every configuration backup?"));
    assert!(output.contains("    /yes to Delete, /no to cancel"));
    assert!(output.contains("Unknown command: /bogus (try /help)"));
    assert!(output.contains("/go: Page paths start with /"));
    assert_eq!(runtime.app().backups().len(), 1);
}

#[tokio::test]
async fn closed_input_quits() {
    let driver = TerminalDriver::new(&b""[..], Vec::new());
    let mut runtime = scrutiny_cli::Runtime::new(driver, app());
    runtime.run().await.unwrap();
    assert!(String::from_utf8_lossy(runtime.driver().output()).contains("not logged in"));
}

//! Application state
//!
//! [`App`] owns the session, the current page, the notification queue, the
//! confirmation modal and whatever the pages last fetched. It turns
//! [`AppEvent`]s into backend calls and state changes.
//!
//! # Destructive operations
//!
//! Deleting or restoring backups and resetting configurations never run
//! directly. The event opens the confirmation modal with a deferred action
//! that performs the call and then refetches the affected listing; the
//! listing is applied only after the user confirms and the action succeeds.
//!
//! # Failures
//!
//! Every backend failure ends in a notification. Storage failures are the
//! only errors [`App::handle`] returns: the session can no longer be trusted
//! to match what is on disk.

use std::{future::Future, sync::Arc};

use futures::FutureExt;
use scrutiny_client::{ApiError, Backend, Endpoint};
use scrutiny_core::{
    ActionOutcome, ConfirmationFlow, ConnectionConfig, DeferredAction, NotificationBridge,
    NotificationConfig, SessionState, Storage, StorageError,
};
use scrutiny_proto::{BackupFile, FileDiffResponse, LoginRequest, ResourceConfig};

use crate::{
    action::AppAction, event::AppEvent, navigator::Navigator, notifications::NotificationCenter,
    routes::Route,
};

/// Shown after one or all backups were deleted.
pub const BACKUPS_DELETED: &str = "Backups have been deleted";
/// Shown after a backup was restored.
pub const BACKUPS_RESTORED: &str = "Backups have been restored";
/// Shown after applied configuration changes were discarded.
pub const CONFIGS_RESET: &str = "Configurations have been reset";
/// Shown after suggestions were applied.
pub const SUGGESTIONS_APPLIED: &str = "Suggestions applied";

/// Listing a confirmed action hands back for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Refresh {
    /// Backups after the change.
    Backups(Vec<BackupFile>),
    /// Configuration checks after the change.
    Checks(Vec<ResourceConfig>),
}

/// Modal type used by the app.
pub type Confirmation = ConfirmationFlow<Refresh, ApiError>;

/// Console application state.
pub struct App<S: Storage> {
    session: SessionState<S>,
    connection: ConnectionConfig,
    navigator: Navigator,
    notifications: NotificationBridge<NotificationCenter>,
    confirmation: Confirmation,
    backend: Arc<dyn Backend>,
    backups: Vec<BackupFile>,
    checks: Vec<ResourceConfig>,
    diff: Option<FileDiffResponse>,
    status: Option<String>,
}

impl<S: Storage> std::fmt::Debug for App<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("session", &self.session)
            .field("route", &self.navigator.current())
            .field("confirmation", &self.confirmation.state())
            .field("backups", &self.backups.len())
            .field("checks", &self.checks.len())
            .finish_non_exhaustive()
    }
}

impl<S: Storage> App<S> {
    /// Create the app and enter the home page (or login, without a session).
    pub fn new(
        session: SessionState<S>,
        connection: ConnectionConfig,
        notification_config: NotificationConfig,
        backend: Arc<dyn Backend>,
    ) -> Self {
        let mut navigator = Navigator::new(Route::Home);
        navigator.navigate(Route::Home, &session);

        Self {
            session,
            connection,
            navigator,
            notifications: NotificationBridge::new(NotificationCenter::new(), notification_config),
            confirmation: ConfirmationFlow::new(),
            backend,
            backups: Vec::new(),
            checks: Vec::new(),
            diff: None,
            status: None,
        }
    }

    /// The session.
    pub fn session(&self) -> &SessionState<S> {
        &self.session
    }

    /// Backend address configuration.
    pub fn connection(&self) -> &ConnectionConfig {
        &self.connection
    }

    /// Page currently shown.
    pub fn route(&self) -> Route {
        self.navigator.current()
    }

    /// Notifications on screen.
    pub fn notifications(&self) -> &NotificationCenter {
        self.notifications.sink()
    }

    /// The confirmation modal.
    pub fn confirmation(&self) -> &Confirmation {
        &self.confirmation
    }

    /// Last fetched backup listing.
    pub fn backups(&self) -> &[BackupFile] {
        &self.backups
    }

    /// Last fetched configuration checks.
    pub fn checks(&self) -> &[ResourceConfig] {
        &self.checks
    }

    /// Last fetched backup diff.
    pub fn diff(&self) -> Option<&FileDiffResponse> {
        self.diff.as_ref()
    }

    /// One-line hint about the last input that couldn't be acted on.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Handle one event.
    ///
    /// # Errors
    ///
    /// Returns the storage error if login or logout couldn't persist the
    /// session.
    pub async fn handle(&mut self, event: AppEvent) -> Result<Vec<AppAction>, StorageError> {
        if !matches!(event, AppEvent::Tick { .. }) {
            self.status = None;
        }

        match event {
            AppEvent::Login { hostname, username, password } => {
                if self.session.is_authenticated() {
                    self.status = Some(format!(
                        "Already logged in as {}@{}. Log out first",
                        self.session.username(),
                        self.session.hostname()
                    ));
                } else {
                    self.login(hostname, username, password).await?;
                }
            },
            AppEvent::Logout => self.logout()?,
            AppEvent::Navigate { path } => match Route::from_path(&path) {
                Some(route) => self.go(route),
                None => self.status = Some(format!("No page at {path}")),
            },
            AppEvent::ListBackups => {
                if self.require_session() {
                    self.load_backups().await;
                }
            },
            AppEvent::ShowDiff { name } => {
                if self.require_session() {
                    self.load_diff(&name).await;
                }
            },
            AppEvent::DeleteBackup { name } => {
                if self.require_session() {
                    self.request_delete_backup(name);
                }
            },
            AppEvent::DeleteBackups => {
                if self.require_session() {
                    self.request_delete_backups();
                }
            },
            AppEvent::RestoreBackup { name } => {
                if self.require_session() {
                    self.request_restore_backup(name);
                }
            },
            AppEvent::RunChecks => {
                if self.require_session() {
                    self.load_checks().await;
                }
            },
            AppEvent::ApplySuggestions { names } => {
                if self.require_session() {
                    self.apply_suggestions(&names).await;
                }
            },
            AppEvent::ResetConfigs => {
                if self.require_session() {
                    self.request_reset_configs();
                }
            },
            AppEvent::Confirm => self.confirm().await,
            AppEvent::Cancel => {
                if let Err(err) = self.confirmation.cancel() {
                    tracing::debug!(error = %err, "cancel ignored");
                    self.status = Some("Nothing to cancel".into());
                }
            },
            AppEvent::Tick { elapsed } => {
                if self.notifications.sink_mut().advance(elapsed) == 0 {
                    return Ok(Vec::new());
                }
            },
            AppEvent::Quit => return Ok(vec![AppAction::Quit]),
        }

        Ok(vec![AppAction::Render])
    }

    fn endpoint(&self) -> Endpoint {
        Endpoint::for_session(&self.session, &self.connection)
    }

    fn require_session(&mut self) -> bool {
        let authenticated = self.session.is_authenticated();
        if !authenticated {
            self.status = Some("Log in first".into());
        }
        authenticated
    }

    fn go(&mut self, route: Route) {
        let navigation = self.navigator.navigate(route, &self.session);
        if navigation.redirected() {
            tracing::info!(requested = %navigation.requested, landed = %navigation.landed, "redirected");
        }
    }

    async fn login(
        &mut self,
        hostname: String,
        username: String,
        password: String,
    ) -> Result<(), StorageError> {
        let endpoint = Endpoint::for_login(&hostname, &self.connection);
        let request = LoginRequest { name: username.clone(), password };

        match self.backend.login(&endpoint, &request).await {
            Ok(response) => {
                self.session.set_credentials(response.token, username, hostname)?;
                self.go(Route::Home);
            },
            Err(err) => self.notifications.notify_failure(&err),
        }
        Ok(())
    }

    fn logout(&mut self) -> Result<(), StorageError> {
        // A pending modal belongs to the old session.
        if self.confirmation.pending().is_some() {
            let _ = self.confirmation.cancel();
        }
        self.session.clear_session()?;
        self.backups.clear();
        self.checks.clear();
        self.diff = None;
        self.go(Route::Login);
        Ok(())
    }

    async fn load_backups(&mut self) {
        match self.backend.list_backups(&self.endpoint()).await {
            Ok(backups) => self.backups = backups,
            Err(err) => self.notifications.notify_failure(&err),
        }
    }

    async fn load_diff(&mut self, name: &str) {
        match self.backend.file_diff(&self.endpoint(), name).await {
            Ok(diff) => self.diff = Some(diff),
            Err(err) => self.notifications.notify_failure(&err),
        }
    }

    async fn load_checks(&mut self) {
        match self.backend.resource_configs(&self.endpoint()).await {
            Ok(checks) => self.checks = checks,
            Err(err) => self.notifications.notify_failure(&err),
        }
    }

    async fn apply_suggestions(&mut self, names: &[String]) {
        let patches: Vec<_> = self
            .checks
            .iter()
            .filter(|check| names.is_empty() || check.name.as_ref().is_some_and(|n| names.contains(n)))
            .filter_map(ResourceConfig::to_patch)
            .collect();

        if patches.is_empty() {
            self.status = Some("No suggestions to apply".into());
            return;
        }

        match self.backend.apply_suggestions(&self.endpoint(), &patches).await {
            Ok(()) => {
                self.notifications.notify_success("apply suggestions", SUGGESTIONS_APPLIED);
                self.load_checks().await;
            },
            Err(err) => self.notifications.notify_failure(&err),
        }
    }

    fn request_delete_backup(&mut self, name: String) {
        let body = format!("Delete backup {name}? This cannot be undone.");
        let action = self.deferred(move |backend, endpoint| async move {
            backend.delete_backup(&endpoint, &name).await?;
            let backups = backend.list_backups(&endpoint).await?;
            Ok::<_, ApiError>(ActionOutcome::new(BACKUPS_DELETED, Refresh::Backups(backups)))
        });
        self.open_confirmation("Delete backup", body, "Delete", action);
    }

    fn request_delete_backups(&mut self) {
        let action = self.deferred(|backend, endpoint| async move {
            backend.delete_backups(&endpoint).await?;
            let backups = backend.list_backups(&endpoint).await?;
            Ok::<_, ApiError>(ActionOutcome::new(BACKUPS_DELETED, Refresh::Backups(backups)))
        });
        self.open_confirmation(
            "Delete backups",
            "Delete every configuration backup? This cannot be undone.".into(),
            "Delete",
            action,
        );
    }

    fn request_restore_backup(&mut self, name: String) {
        let body = format!(
            "Replace the current configuration with {name} and reload it? \
             The current configuration is backed up first."
        );
        let action = self.deferred(move |backend, endpoint| async move {
            backend.restore_backup(&endpoint, &name).await?;
            let backups = backend.list_backups(&endpoint).await?;
            Ok::<_, ApiError>(ActionOutcome::new(BACKUPS_RESTORED, Refresh::Backups(backups)))
        });
        self.open_confirmation("Restore backup", body, "Restore", action);
    }

    fn request_reset_configs(&mut self) {
        let action = self.deferred(|backend, endpoint| async move {
            backend.reset_configs(&endpoint).await?;
            let checks = backend.resource_configs(&endpoint).await?;
            Ok::<_, ApiError>(ActionOutcome::new(CONFIGS_RESET, Refresh::Checks(checks)))
        });
        self.open_confirmation(
            "Reset configurations",
            "Discard every change applied through this console?".into(),
            "Reset",
            action,
        );
    }

    /// Bind a backend operation to the current endpoint for later execution.
    fn deferred<F, Fut>(&self, operation: F) -> DeferredAction<Refresh, ApiError>
    where
        F: FnOnce(Arc<dyn Backend>, Endpoint) -> Fut + Send + 'static,
        Fut: Future<Output = Result<ActionOutcome<Refresh>, ApiError>> + Send + 'static,
    {
        let backend = Arc::clone(&self.backend);
        let endpoint = self.endpoint();
        Box::new(move || operation(backend, endpoint).boxed())
    }

    fn open_confirmation(
        &mut self,
        title: &str,
        body: String,
        label: &str,
        action: DeferredAction<Refresh, ApiError>,
    ) {
        if let Err(err) = self.confirmation.open(title, body, label, action) {
            tracing::debug!(error = %err, "confirmation already open");
            self.status = Some("Answer the open confirmation first".into());
        }
    }

    async fn confirm(&mut self) {
        match self.confirmation.confirm(&mut self.notifications).await {
            Ok(Some(Refresh::Backups(backups))) => self.backups = backups,
            Ok(Some(Refresh::Checks(checks))) => self.checks = checks,
            Ok(None) => {},
            Err(err) => {
                tracing::debug!(error = %err, "confirm ignored");
                self.status = Some("Nothing to confirm".into());
            },
        }
    }
}

//! Success/failure feedback.
//!
//! [`NotificationBridge`] turns the outcome of an operation into a
//! [`NotificationRecord`] and hands it to a [`NotificationSink`] (the display
//! collaborator). Records are never read back or mutated once handed over;
//! the sink owns their lifetime and dismisses them after `duration`.
//!
//! Failures are always logged with their full detail, whichever message ends
//! up on screen.

use std::time::Duration;

/// Title of every success notification.
pub const SUCCESS_TITLE: &str = "Operation successful";
/// Title of every failure notification.
pub const FAILURE_TITLE: &str = "Operation unsuccessful";
/// Message shown when a failure carries no server-supplied reason.
pub const FALLBACK_MESSAGE: &str = "Something went wrong. See console tab for more info";
/// Default visible duration of a notification.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);

/// Kind of notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// The operation completed.
    Success,
    /// The operation failed.
    Error,
}

/// A transient user-visible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRecord {
    /// Success or error.
    pub kind: NotificationKind,
    /// Short heading.
    pub title: String,
    /// Body text.
    pub message: String,
    /// How long the record stays visible.
    pub duration: Duration,
}

/// Display collaborator that shows notifications.
pub trait NotificationSink {
    /// Enqueue a record for display.
    fn add_notification(&mut self, record: NotificationRecord);
}

impl NotificationSink for Vec<NotificationRecord> {
    fn add_notification(&mut self, record: NotificationRecord) {
        self.push(record);
    }
}

/// An error that may carry a message written by the server for the user.
pub trait FailureReport: std::error::Error {
    /// Server-supplied `error_message`, if the failure has one.
    fn server_message(&self) -> Option<&str> {
        None
    }
}

/// Notification configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationConfig {
    /// Visible duration of every notification.
    pub duration: Duration,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { duration: DEFAULT_DURATION }
    }
}

/// Translates outcomes into notifications on a sink.
#[derive(Debug)]
pub struct NotificationBridge<S: NotificationSink> {
    sink: S,
    config: NotificationConfig,
}

impl<S: NotificationSink> NotificationBridge<S> {
    /// Create a bridge over `sink`.
    pub fn new(sink: S, config: NotificationConfig) -> Self {
        Self { sink, config }
    }

    /// The display collaborator.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the display collaborator, e.g. to dismiss records.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Report a completed operation.
    ///
    /// `operation` only goes to the log; the user sees `detail`.
    pub fn notify_success(&mut self, operation: &str, detail: &str) {
        tracing::info!(operation, detail, "operation succeeded");
        self.sink.add_notification(NotificationRecord {
            kind: NotificationKind::Success,
            title: SUCCESS_TITLE.to_owned(),
            message: detail.to_owned(),
            duration: self.config.duration,
        });
    }

    /// Report a failed operation.
    ///
    /// Shows the server's message when there is one, the generic fallback
    /// otherwise. The error itself is logged in both cases.
    pub fn notify_failure<E: FailureReport + ?Sized>(&mut self, error: &E) {
        tracing::error!(error = %error, "operation failed");
        let message = error.server_message().unwrap_or(FALLBACK_MESSAGE);
        self.sink.add_notification(NotificationRecord {
            kind: NotificationKind::Error,
            title: FAILURE_TITLE.to_owned(),
            message: message.to_owned(),
            duration: self.config.duration,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("rejected")]
    struct Rejected(Option<String>);

    impl FailureReport for Rejected {
        fn server_message(&self) -> Option<&str> {
            self.0.as_deref()
        }
    }

    #[test]
    fn success_uses_fixed_title_and_duration() {
        let mut bridge = NotificationBridge::new(Vec::new(), NotificationConfig::default());
        bridge.notify_success("delete backups", "Backups have been deleted");

        let record = &bridge.sink()[0];
        assert_eq!(record.kind, NotificationKind::Success);
        assert_eq!(record.title, "Operation successful");
        assert_eq!(record.message, "Backups have been deleted");
        assert_eq!(record.duration, Duration::from_millis(3000));
    }

    #[test]
    fn failure_prefers_server_message() {
        let mut bridge = NotificationBridge::new(Vec::new(), NotificationConfig::default());
        bridge.notify_failure(&Rejected(Some("Incorrect user password".into())));

        let record = &bridge.sink()[0];
        assert_eq!(record.kind, NotificationKind::Error);
        assert_eq!(record.title, FAILURE_TITLE);
        assert_eq!(record.message, "Incorrect user password");
    }

    #[test]
    fn failure_without_server_message_uses_fallback() {
        let mut bridge = NotificationBridge::new(Vec::new(), NotificationConfig::default());
        bridge.notify_failure(&Rejected(None));
        assert_eq!(bridge.sink()[0].message, FALLBACK_MESSAGE);
    }

    #[test]
    fn configured_duration_is_applied() {
        let config = NotificationConfig { duration: Duration::from_millis(500) };
        let mut bridge = NotificationBridge::new(Vec::new(), config);
        bridge.notify_success("x", "y");
        assert_eq!(bridge.sink()[0].duration, Duration::from_millis(500));
    }
}

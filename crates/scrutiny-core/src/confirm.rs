//! Confirmation modal for destructive actions.
//!
//! # State Machine
//!
//! ```text
//!            open()                 confirm()
//! ┌────────┐ ─────> ┌────────────────┐ ─────> ┌───────────┐
//! │ Closed │        │ PendingConfirm │        │ Executing │
//! └────────┘ <───── └────────────────┘        └───────────┘
//!      ↑     cancel()                               │
//!      └────────────────────────────────────────────┘
//!                 action completed (ok or err)
//! ```
//!
//! The deferred action is moved out of the modal when `confirm()` starts, so
//! for one `open()` it runs at most once, and never after `cancel()`.
//! Calls that don't match the current state return
//! [`ConfirmError::InvalidState`] and change nothing.
//!
//! There is no timeout: a slow action keeps the modal in `Executing` until it
//! completes.

use futures::future::BoxFuture;

use crate::{
    error::ConfirmError,
    notify::{FailureReport, NotificationBridge, NotificationSink},
};

/// Result of a successful deferred action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome<T> {
    /// Message shown in the success notification.
    pub message: String,
    /// Data the action produced, e.g. a refreshed listing.
    pub value: T,
}

impl<T> ActionOutcome<T> {
    /// Pair a success message with a value.
    pub fn new(message: impl Into<String>, value: T) -> Self {
        Self { message: message.into(), value }
    }
}

/// Zero-argument asynchronous operation run on confirmation.
pub type DeferredAction<T, E> =
    Box<dyn FnOnce() -> BoxFuture<'static, Result<ActionOutcome<T>, E>> + Send>;

/// Modal state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationState {
    /// No modal shown.
    Closed,
    /// Modal shown, waiting for the user.
    PendingConfirm,
    /// User confirmed; the action is running.
    Executing,
}

/// What the modal shows, plus the action it guards.
pub struct ConfirmationRequest<T, E> {
    title: String,
    body_text: String,
    confirm_label: String,
    action: DeferredAction<T, E>,
}

impl<T, E> ConfirmationRequest<T, E> {
    /// Modal heading.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Modal body.
    pub fn body_text(&self) -> &str {
        &self.body_text
    }

    /// Label of the confirming button.
    pub fn confirm_label(&self) -> &str {
        &self.confirm_label
    }
}

impl<T, E> std::fmt::Debug for ConfirmationRequest<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfirmationRequest")
            .field("title", &self.title)
            .field("body_text", &self.body_text)
            .field("confirm_label", &self.confirm_label)
            .finish_non_exhaustive()
    }
}

/// Confirmation modal state machine.
pub struct ConfirmationFlow<T, E> {
    state: ConfirmationState,
    request: Option<ConfirmationRequest<T, E>>,
}

impl<T, E> Default for ConfirmationFlow<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> std::fmt::Debug for ConfirmationFlow<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfirmationFlow")
            .field("state", &self.state)
            .field("request", &self.request)
            .finish()
    }
}

impl<T, E> ConfirmationFlow<T, E> {
    /// Create a closed modal.
    pub fn new() -> Self {
        Self { state: ConfirmationState::Closed, request: None }
    }

    /// Current state.
    pub fn state(&self) -> ConfirmationState {
        self.state
    }

    /// The request being shown, while pending.
    pub fn pending(&self) -> Option<&ConfirmationRequest<T, E>> {
        match self.state {
            ConfirmationState::PendingConfirm => self.request.as_ref(),
            _ => None,
        }
    }

    /// Show the modal for `action`.
    ///
    /// # Errors
    /// Returns `InvalidState` unless the modal is closed.
    pub fn open(
        &mut self,
        title: impl Into<String>,
        body_text: impl Into<String>,
        confirm_label: impl Into<String>,
        action: DeferredAction<T, E>,
    ) -> Result<(), ConfirmError> {
        self.expect_state(ConfirmationState::Closed, "open")?;

        let request = ConfirmationRequest {
            title: title.into(),
            body_text: body_text.into(),
            confirm_label: confirm_label.into(),
            action,
        };
        tracing::debug!(title = %request.title, "confirmation opened");

        self.request = Some(request);
        self.state = ConfirmationState::PendingConfirm;
        Ok(())
    }

    /// Dismiss the modal without running the action.
    ///
    /// # Errors
    /// Returns `InvalidState` unless the modal is pending.
    pub fn cancel(&mut self) -> Result<(), ConfirmError> {
        self.expect_state(ConfirmationState::PendingConfirm, "cancel")?;

        if let Some(request) = self.request.take() {
            tracing::debug!(title = %request.title, "confirmation cancelled");
        }
        self.state = ConfirmationState::Closed;
        Ok(())
    }

    /// Run the action and report its outcome on `bridge`.
    ///
    /// Returns the action's value on success, `None` on failure (the failure
    /// has already been reported). The modal is closed afterwards either way.
    ///
    /// # Errors
    /// Returns `InvalidState` unless the modal is pending.
    pub async fn confirm<S>(
        &mut self,
        bridge: &mut NotificationBridge<S>,
    ) -> Result<Option<T>, ConfirmError>
    where
        S: NotificationSink,
        E: FailureReport,
    {
        self.expect_state(ConfirmationState::PendingConfirm, "confirm")?;
        let Some(request) = self.request.take() else {
            return Err(ConfirmError::InvalidState {
                state: self.state,
                operation: "confirm".to_string(),
            });
        };

        self.state = ConfirmationState::Executing;
        let ConfirmationRequest { title, action, .. } = request;
        let result = action().await;
        self.state = ConfirmationState::Closed;

        match result {
            Ok(outcome) => {
                bridge.notify_success(&title, &outcome.message);
                Ok(Some(outcome.value))
            },
            Err(error) => {
                bridge.notify_failure(&error);
                Ok(None)
            },
        }
    }

    fn expect_state(&self, expected: ConfirmationState, operation: &str) -> Result<(), ConfirmError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(ConfirmError::InvalidState { state: self.state, operation: operation.to_string() })
        }
    }
}

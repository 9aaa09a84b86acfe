//! Generic runtime loop.
//!
//! ```text
//! ┌────────────┐  events   ┌─────┐  actions  ┌──────────────┐
//! │   Driver   │ ────────> │ App │ ────────> │ Render/Quit  │
//! │ poll_event │           └─────┘           │  via Driver  │
//! └────────────┘                             └──────────────┘
//! ```
//!
//! Every poll is preceded by a [`AppEvent::Tick`] carrying the time since the
//! previous one, so notifications expire on the driver's clock.

use scrutiny_core::{Storage, StorageError};
use thiserror::Error;

use crate::{App, AppAction, AppEvent, Driver};

/// Errors that stop the runtime.
#[derive(Debug, Error)]
pub enum RuntimeError<E: std::error::Error + 'static> {
    /// The driver failed to read input or render.
    #[error("driver error: {0}")]
    Driver(#[source] E),

    /// The session could not be persisted.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Drives an [`App`] with a [`Driver`] until the app quits.
pub struct Runtime<D: Driver, S: Storage> {
    driver: D,
    app: App<S>,
    last_tick: D::Instant,
}

impl<D: Driver, S: Storage> Runtime<D, S> {
    /// Create a runtime.
    pub fn new(driver: D, app: App<S>) -> Self {
        let last_tick = driver.now();
        Self { driver, app, last_tick }
    }

    /// The application state.
    pub fn app(&self) -> &App<S> {
        &self.app
    }

    /// The driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Run until the app asks to quit.
    ///
    /// The driver is stopped on every exit, including errors.
    ///
    /// # Errors
    ///
    /// Returns the first driver or storage error.
    pub async fn run(&mut self) -> Result<(), RuntimeError<D::Error>> {
        let result = self.event_loop().await;
        self.driver.stop();
        result
    }

    async fn event_loop(&mut self) -> Result<(), RuntimeError<D::Error>> {
        self.driver.render(&self.app).map_err(RuntimeError::Driver)?;

        loop {
            let events = self.driver.poll_event().await.map_err(RuntimeError::Driver)?;

            let now = self.driver.now();
            let elapsed = now - self.last_tick;
            self.last_tick = now;

            let mut render = false;
            for event in std::iter::once(AppEvent::Tick { elapsed }).chain(events) {
                for action in self.app.handle(event).await? {
                    match action {
                        AppAction::Render => render = true,
                        AppAction::Quit => {
                            tracing::info!("quitting");
                            return Ok(());
                        },
                    }
                }
            }

            if render {
                self.driver.render(&self.app).map_err(RuntimeError::Driver)?;
            }
        }
    }
}

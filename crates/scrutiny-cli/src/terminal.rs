//! Line-oriented terminal driver.
//!
//! Reads one command per line and writes a full frame after every change.
//! Generic over its streams so tests can feed scripted input and capture the
//! output.

use std::{io::Write, time::Instant};

use scrutiny_app::{App, AppEvent, Driver};
use scrutiny_core::Storage;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::{
    commands::{self, Command, HELP},
    view,
};

/// Terminal I/O errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// Reading input or writing output failed.
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// [`Driver`] over a line reader and a writer.
pub struct TerminalDriver<R, W> {
    input: R,
    output: W,
    line: String,
}

impl<R, W> TerminalDriver<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    /// Create a driver reading commands from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output, line: String::new() }
    }

    /// The output stream.
    pub fn output(&self) -> &W {
        &self.output
    }

    fn explain(&mut self, command: &Command) -> Result<(), TerminalError> {
        match command {
            Command::Help => writeln!(self.output, "{HELP}")?,
            Command::Unknown { input } => {
                writeln!(self.output, "Unknown command: {input} (try /help)")?;
            },
            Command::InvalidArgs { command, error } => writeln!(self.output, "/{command}: {error}")?,
            _ => {},
        }
        Ok(())
    }
}

impl<R, W> Driver for TerminalDriver<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    type Error = TerminalError;
    type Instant = Instant;

    async fn poll_event(&mut self) -> Result<Vec<AppEvent>, Self::Error> {
        self.line.clear();
        let read = self.input.read_line(&mut self.line).await?;
        if read == 0 {
            tracing::debug!("input closed");
            return Ok(vec![AppEvent::Quit]);
        }

        let command = commands::parse(&self.line);
        self.explain(&command)?;
        Ok(command.into_event().into_iter().collect())
    }

    fn now(&self) -> Self::Instant {
        Instant::now()
    }

    fn render<S: Storage>(&mut self, app: &App<S>) -> Result<(), Self::Error> {
        writeln!(self.output)?;
        view::render(app, &mut self.output)?;
        Ok(())
    }

    fn stop(&mut self) {
        if let Err(err) = self.output.flush() {
            tracing::warn!(error = %err, "failed to flush output");
        }
    }
}

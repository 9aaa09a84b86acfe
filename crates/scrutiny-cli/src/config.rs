//! Command-line configuration.

use std::{path::PathBuf, time::Duration};

use clap::Parser;
use scrutiny_core::{ConnectionConfig, NotificationConfig, connection::DEFAULT_PORT};

/// Console for reviewing and tuning PostgreSQL configuration
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "scrutiny")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Port the backend listens on
    #[arg(short, long, env = "SCRUTINY_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Directory holding the session store
    #[arg(long, env = "SCRUTINY_DATA_DIR", default_value = ".scrutiny")]
    pub data_dir: PathBuf,

    /// How long notifications stay visible, in milliseconds
    #[arg(long, default_value_t = 3000)]
    pub notification_ms: u64,

    /// Per-request timeout, in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,
}

impl Args {
    /// Backend address configuration.
    pub fn connection(&self) -> ConnectionConfig {
        ConnectionConfig::new(self.port)
    }

    /// Notification configuration.
    pub fn notifications(&self) -> NotificationConfig {
        NotificationConfig { duration: Duration::from_millis(self.notification_ms) }
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Path of the session database.
    pub fn session_path(&self) -> PathBuf {
        self.data_dir.join("session.redb")
    }
}

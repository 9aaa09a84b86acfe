//! Application events
//!
//! Events come from the driver (user input, timers) and are handled by
//! [`crate::App::handle`].

use std::time::Duration;

/// Input to the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Log in to a server.
    Login {
        /// Server identifier: IPv4 address or domain name.
        hostname: String,
        /// Database user name.
        username: String,
        /// Password of that user.
        password: String,
    },

    /// End the session.
    Logout,

    /// Go to a page by path.
    Navigate {
        /// Page path, e.g. `/backups`.
        path: String,
    },

    /// Fetch the backup listing.
    ListBackups,

    /// Fetch the diff between a backup and the live configuration.
    ShowDiff {
        /// Backup file name.
        name: String,
    },

    /// Ask to delete one backup.
    DeleteBackup {
        /// Backup file name.
        name: String,
    },

    /// Ask to delete every backup.
    DeleteBackups,

    /// Ask to restore a backup.
    RestoreBackup {
        /// Backup file name.
        name: String,
    },

    /// Run the configuration checks.
    RunChecks,

    /// Apply suggestions. An empty list applies every current suggestion.
    ApplySuggestions {
        /// Setting names.
        names: Vec<String>,
    },

    /// Ask to discard applied configuration changes.
    ResetConfigs,

    /// Confirm the open modal.
    Confirm,

    /// Dismiss the open modal.
    Cancel,

    /// Time passed.
    Tick {
        /// Time since the previous tick.
        elapsed: Duration,
    },

    /// Quit the application.
    Quit,
}

//! Command parsing for the console.
//!
//! This module parses input lines into structured [`Command`] values.

use scrutiny_app::AppEvent;

/// Usage summary shown by `/help`.
pub const HELP: &str = "\
/login <host> <user> <password>  log in to a server
/logout                          end the session
/go <path>                       open a page (/, /about, /docs, /configurations, /backups)
/backups                         list configuration backups
/diff <name>                     compare a backup with the live configuration
/delete <name>                   delete one backup
/delete-all                      delete every backup
/restore <name>                  restore a backup
/checks                          run the configuration checks
/apply [names...]                apply suggestions (all when no names given)
/reset                           discard applied configuration changes
/yes, /no                        answer the open confirmation
/help                            show this list
/quit                            exit";

/// Parsed command from user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Log in.
    Login {
        /// Server identifier.
        hostname: String,
        /// Database user.
        username: String,
        /// Password.
        password: String,
    },

    /// End the session.
    Logout,

    /// Open a page.
    Go {
        /// Page path.
        path: String,
    },

    /// List backups.
    Backups,

    /// Show a backup diff.
    Diff {
        /// Backup file name.
        name: String,
    },

    /// Delete one backup.
    Delete {
        /// Backup file name.
        name: String,
    },

    /// Delete every backup.
    DeleteAll,

    /// Restore a backup.
    Restore {
        /// Backup file name.
        name: String,
    },

    /// Run the configuration checks.
    Checks,

    /// Apply suggestions.
    Apply {
        /// Setting names; empty means all.
        names: Vec<String>,
    },

    /// Discard applied configuration changes.
    Reset,

    /// Confirm the open modal.
    Yes,

    /// Dismiss the open modal.
    No,

    /// Show usage.
    Help,

    /// Quit the application.
    Quit,

    /// Blank line.
    Empty,

    /// Unknown or invalid command.
    Unknown {
        /// The original input.
        input: String,
    },

    /// Command with missing or invalid arguments.
    InvalidArgs {
        /// Command name.
        command: String,
        /// Error message.
        error: String,
    },
}

impl Command {
    /// Event the command maps to, if it maps to one.
    pub fn into_event(self) -> Option<AppEvent> {
        let event = match self {
            Self::Login { hostname, username, password } => {
                AppEvent::Login { hostname, username, password }
            },
            Self::Logout => AppEvent::Logout,
            Self::Go { path } => AppEvent::Navigate { path },
            Self::Backups => AppEvent::ListBackups,
            Self::Diff { name } => AppEvent::ShowDiff { name },
            Self::Delete { name } => AppEvent::DeleteBackup { name },
            Self::DeleteAll => AppEvent::DeleteBackups,
            Self::Restore { name } => AppEvent::RestoreBackup { name },
            Self::Checks => AppEvent::RunChecks,
            Self::Apply { names } => AppEvent::ApplySuggestions { names },
            Self::Reset => AppEvent::ResetConfigs,
            Self::Yes => AppEvent::Confirm,
            Self::No => AppEvent::Cancel,
            Self::Quit => AppEvent::Quit,
            Self::Help | Self::Empty | Self::Unknown { .. } | Self::InvalidArgs { .. } => {
                return None;
            },
        };
        Some(event)
    }
}

/// Parse a user input line into a command.
///
/// Commands start with `/`; anything else is unknown.
pub fn parse(input: &str) -> Command {
    let input = input.trim();

    if input.is_empty() {
        return Command::Empty;
    }

    let Some(cmd_str) = input.strip_prefix('/') else {
        return Command::Unknown { input: input.to_string() };
    };

    let parts: Vec<&str> = cmd_str.split_whitespace().collect();
    let command = parts.first().copied().unwrap_or("");
    let args = parts.get(1..).unwrap_or_default();

    match command {
        "login" => match args {
            [hostname, username, password] => Command::Login {
                hostname: (*hostname).to_string(),
                username: (*username).to_string(),
                password: (*password).to_string(),
            },
            _ => invalid("login", "Usage: /login <host> <user> <password>"),
        },

        "logout" => Command::Logout,

        "go" => match args {
            [path] if path.starts_with('/') => Command::Go { path: (*path).to_string() },
            [_] => invalid("go", "Page paths start with /"),
            _ => invalid("go", "Usage: /go <path>"),
        },

        "backups" => Command::Backups,

        "diff" => single_name(args, "diff").map_or_else(|e| e, |name| Command::Diff { name }),
        "delete" => single_name(args, "delete").map_or_else(|e| e, |name| Command::Delete { name }),
        "restore" => {
            single_name(args, "restore").map_or_else(|e| e, |name| Command::Restore { name })
        },

        "delete-all" => Command::DeleteAll,

        "checks" => Command::Checks,

        "apply" => Command::Apply { names: args.iter().map(|s| (*s).to_string()).collect() },

        "reset" => Command::Reset,

        "yes" | "y" => Command::Yes,
        "no" | "n" => Command::No,

        "help" | "h" => Command::Help,

        "quit" | "q" => Command::Quit,

        _ => Command::Unknown { input: input.to_string() },
    }
}

fn invalid(command: &str, error: &str) -> Command {
    Command::InvalidArgs { command: command.into(), error: error.into() }
}

fn single_name(args: &[&str], command: &str) -> Result<String, Command> {
    match args {
        [name] => Ok((*name).to_string()),
        _ => Err(invalid(command, &format!("Usage: /{command} <name>"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_login() {
        assert_eq!(
            parse("/login 10.0.0.5 postgres secret"),
            Command::Login {
                hostname: "10.0.0.5".into(),
                username: "postgres".into(),
                password: "secret".into(),
            }
        );
    }

    #[test]
    fn parse_login_missing_password() {
        assert!(
            matches!(parse("/login 10.0.0.5 postgres"), Command::InvalidArgs { command, .. } if command == "login")
        );
    }

    #[test]
    fn parse_go() {
        assert_eq!(parse("/go /backups"), Command::Go { path: "/backups".into() });
        assert!(matches!(parse("/go backups"), Command::InvalidArgs { .. }));
        assert!(matches!(parse("/go"), Command::InvalidArgs { .. }));
    }

    #[test]
    fn parse_backup_commands() {
        let name = "postgresql.auto.conf_1714557600";
        assert_eq!(parse("/backups"), Command::Backups);
        assert_eq!(parse(&format!("/diff {name}")), Command::Diff { name: name.into() });
        assert_eq!(parse(&format!("/delete {name}")), Command::Delete { name: name.into() });
        assert_eq!(parse(&format!("/restore {name}")), Command::Restore { name: name.into() });
        assert_eq!(parse("/delete-all"), Command::DeleteAll);
        assert!(matches!(parse("/delete"), Command::InvalidArgs { command, .. } if command == "delete"));
    }

    #[test]
    fn parse_apply() {
        assert_eq!(parse("/apply"), Command::Apply { names: vec![] });
        assert_eq!(
            parse("/apply work_mem shared_buffers"),
            Command::Apply { names: vec!["work_mem".into(), "shared_buffers".into()] }
        );
    }

    #[test]
    fn parse_modal_answers() {
        assert_eq!(parse("/yes"), Command::Yes);
        assert_eq!(parse("/y"), Command::Yes);
        assert_eq!(parse("/no"), Command::No);
    }

    #[test]
    fn parse_quit() {
        assert_eq!(parse("/quit"), Command::Quit);
        assert_eq!(parse("/q"), Command::Quit);
    }

    #[test]
    fn parse_unknown_and_empty() {
        assert!(matches!(parse("/unknown"), Command::Unknown { .. }));
        assert!(matches!(parse("hello"), Command::Unknown { .. }));
        assert_eq!(parse("   "), Command::Empty);
    }

    #[test]
    fn events() {
        assert_eq!(parse("/delete-all").into_event(), Some(AppEvent::DeleteBackups));
        assert_eq!(parse("/no").into_event(), Some(AppEvent::Cancel));
        assert_eq!(parse("/help").into_event(), None);
        assert_eq!(parse("/bogus").into_event(), None);
    }
}

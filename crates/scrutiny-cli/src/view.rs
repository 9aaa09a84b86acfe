//! Text rendering of the application state.
//!
//! One frame per render: a header with the page and session, the page body,
//! the open confirmation, visible notifications and the status hint.

use std::io::{self, Write};

use scrutiny_app::{App, Route};
use scrutiny_core::{NotificationKind, Storage};
use scrutiny_proto::{FileDiffLineType, ResourceConfig};

use crate::commands::HELP;

/// Write one frame for `app` to `out`.
pub fn render<S: Storage, W: Write>(app: &App<S>, out: &mut W) -> io::Result<()> {
    header(app, out)?;

    match app.route() {
        Route::Login => writeln!(out, "Log in with /login <host> <user> <password>")?,
        Route::Home => {
            writeln!(out, "Backend: {}", app.connection().base_api_path(app.session()))?;
            writeln!(out, "Pages: /configurations /backups /docs /about")?;
        },
        Route::About => {
            writeln!(out, "Reviews PostgreSQL resource settings, suggests values and")?;
            writeln!(out, "keeps a backup of postgresql.auto.conf before every change.")?;
        },
        Route::Docs => writeln!(out, "{HELP}")?,
        Route::Configurations => checks(app.checks(), out)?,
        Route::Backups => backups(app, out)?,
    }

    if let Some(request) = app.confirmation().pending() {
        writeln!(out)?;
        writeln!(out, "[?] {}: {}", request.title(), request.body_text())?;
        writeln!(out, "    /yes to {}, /no to cancel", request.confirm_label())?;
    }

    for record in app.notifications().visible() {
        let mark = match record.kind {
            NotificationKind::Success => "ok",
            NotificationKind::Error => "!!",
        };
        writeln!(out, "[{mark}] {}: {}", record.title, record.message)?;
    }

    if let Some(status) = app.status() {
        writeln!(out, "> {status}")?;
    }

    out.flush()
}

fn header<S: Storage, W: Write>(app: &App<S>, out: &mut W) -> io::Result<()> {
    let session = app.session();
    if session.is_authenticated() {
        writeln!(out, "== {} == {}@{}", app.route(), session.username(), session.hostname())
    } else {
        writeln!(out, "== {} == not logged in", app.route())
    }
}

fn checks<W: Write>(checks: &[ResourceConfig], out: &mut W) -> io::Result<()> {
    if checks.is_empty() {
        return writeln!(out, "No checks loaded. Run /checks");
    }

    let (suggestions, passed): (Vec<_>, Vec<_>) = checks.iter().partition(|c| c.is_suggestion());

    writeln!(out, "Suggestions ({})", suggestions.len())?;
    for check in &suggestions {
        writeln!(
            out,
            "  {:<32} {} -> {}",
            check.name.as_deref().unwrap_or("?"),
            with_unit(check.value.as_deref(), check.unit.as_deref()),
            with_unit(check.suggested_value.as_deref(), check.unit.as_deref()),
        )?;
        if let Some(details) = check.details.as_deref().filter(|d| !d.is_empty()) {
            writeln!(out, "      {details}")?;
        }
    }

    writeln!(out, "Checks that passed ({})", passed.len())?;
    for check in &passed {
        let flag = if check.got_error == Some(true) { " (check failed)" } else { "" };
        writeln!(
            out,
            "  {:<32} {}{flag}",
            check.name.as_deref().unwrap_or("?"),
            with_unit(check.value.as_deref(), check.unit.as_deref()),
        )?;
    }
    Ok(())
}

fn with_unit(value: Option<&str>, unit: Option<&str>) -> String {
    match (value, unit) {
        (Some(value), Some(unit)) if !unit.is_empty() => format!("{value} {unit}"),
        (Some(value), _) => value.to_string(),
        (None, _) => "-".to_string(),
    }
}

fn backups<S: Storage, W: Write>(app: &App<S>, out: &mut W) -> io::Result<()> {
    let backups = app.backups();
    if backups.is_empty() {
        writeln!(out, "No backups listed. Run /backups")?;
    } else {
        writeln!(out, "Backups ({})", backups.len())?;
        for backup in backups {
            writeln!(out, "  {}  {}", backup.name, backup.time)?;
        }
    }

    if let Some(diff) = app.diff() {
        writeln!(out, "Diff {} ({} changed)", diff.filename, diff.changed_lines())?;
        for line in &diff.diff {
            let prefix = match line.kind {
                FileDiffLineType::Equal => ' ',
                FileDiffLineType::Insert => '+',
                FileDiffLineType::Delete => '-',
            };
            writeln!(out, "  {prefix} {}", line.line)?;
        }
    }
    Ok(())
}

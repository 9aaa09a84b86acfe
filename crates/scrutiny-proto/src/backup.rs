//! Configuration backup payloads.
//!
//! A backup is a copy of the server's auto-generated configuration file taken
//! before each change. The backend lists them, diffs them against the live
//! file, restores one over the live file, or deletes them.

use serde::{Deserialize, Serialize};

/// One backup file as returned by `GET /api/backup`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupFile {
    /// File name of the backup (`postgresql.auto.conf_<unix seconds>`).
    pub name: String,
    /// Creation timestamp, formatted by the server.
    pub time: String,
    /// Line diff against the live file. The backend sends `null` when the
    /// files are identical, so this stays optional.
    #[serde(default)]
    pub diff: Option<Vec<FileDiffLine>>,
}

/// A single line of a file comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDiffLine {
    /// Text of the line, including its trailing newline if any.
    pub line: String,
    /// Whether the line was added, removed or left unchanged.
    #[serde(rename = "type")]
    pub kind: FileDiffLineType,
}

/// Classification of a diff line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileDiffLineType {
    /// Present in both files.
    Equal,
    /// Present only in the backup.
    Insert,
    /// Present only in the live file.
    Delete,
}

/// Response of `GET /api/file-diff/{backup_name}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDiffResponse {
    /// Name of the file being compared.
    pub filename: String,
    /// Creation timestamp of the backup.
    pub time: String,
    /// Line-by-line diff.
    #[serde(default)]
    pub diff: Vec<FileDiffLine>,
}

impl FileDiffResponse {
    /// Number of lines that differ between the backup and the live file.
    pub fn changed_lines(&self) -> usize {
        self.diff.iter().filter(|l| l.kind != FileDiffLineType::Equal).count()
    }
}

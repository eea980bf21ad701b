//! Repository publishing values: commit messages, ignore list, commit outcome.

use chrono::{DateTime, TimeZone};

/// Entries written to `.gitignore` when the site root has none.
pub const IGNORE_ENTRIES: &[&str] = &[".venv/", "__pycache__/", "*.pyc", ".env", ".vscode/"];

/// Timestamp format embedded in commit messages.
pub const COMMIT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Build the commit message for a publish run at `now`.
pub fn commit_message<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("Update movie list {}", now.format(COMMIT_TIMESTAMP_FORMAT))
}

/// Content of a freshly written ignore file.
pub fn ignore_file_content() -> String {
    let mut content = IGNORE_ENTRIES.join("\n");
    content.push('\n');
    content
}

/// Result of the commit step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Committed,
    /// Nothing was pending; the failed commit was tolerated.
    NothingToCommit,
}

/// Which push attempt succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    Pushed,
    /// Plain push failed and the upstream-setting retry succeeded.
    PushedWithUpstream,
}

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for moviepub operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error in moviepub.toml.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// No interpreter candidate resolved to an invocable executable.
    #[error(
        "No Python interpreter found (tried: {}). Create a virtual environment with 'python -m venv .venv' or install Python and add it to PATH.",
        tried.join(", ")
    )]
    MissingRuntime { tried: Vec<String> },

    /// No generator script candidate exists.
    #[error("{}", missing_script_message(searched, found))]
    MissingScript { searched: Vec<PathBuf>, found: Vec<PathBuf> },

    /// Required secret is absent or blank after loading the secret file.
    #[error(
        "Missing {key}. Add a line '{key}=<your key>' to {} (one NAME=value per line).",
        file.display()
    )]
    MissingSecret { key: String, file: PathBuf },

    /// The generator could not be started.
    #[error("Failed to start '{program}': {details}")]
    ProcessSpawn { program: String, details: String },

    /// The generator exited unsuccessfully.
    #[error("Generator script failed: {}", exit_description(*code))]
    ChildProcessFailure { code: Option<i32> },

    /// No git executable could be resolved.
    #[error(
        "git not found (tried: {}). Install Git from https://git-scm.com/downloads and make sure it is on PATH.",
        tried.join(", ")
    )]
    MissingVcs { tried: Vec<String> },

    /// Git execution failed.
    #[error("Git error running '{command}': {details}")]
    GitError { command: String, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_) | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::MissingRuntime { .. }
            | AppError::MissingScript { .. }
            | AppError::MissingSecret { .. }
            | AppError::MissingVcs { .. } => io::ErrorKind::NotFound,
            AppError::ProcessSpawn { .. }
            | AppError::ChildProcessFailure { .. }
            | AppError::GitError { .. } => io::ErrorKind::Other,
        }
    }
}

fn exit_description(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

fn missing_script_message(searched: &[PathBuf], found: &[PathBuf]) -> String {
    let mut lines = vec!["Generator script not found. Searched:".to_string()];
    lines.extend(searched.iter().map(|path| format!("  - {}", path.display())));
    if found.is_empty() {
        lines.push("No .py files found under the site root.".to_string());
    } else {
        lines.push("Python files present under the site root:".to_string());
        lines.extend(found.iter().map(|path| format!("  - {}", path.display())));
    }
    lines.join("\n")
}

use std::ffi::OsString;
use std::path::PathBuf;

use crate::domain::AppError;

/// A fully described child process launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    pub cwd: PathBuf,
    /// Variables set on top of the inherited environment.
    pub env: Vec<(String, String)>,
}

/// How a child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessExit {
    /// Exit code, or `None` when the child was terminated by a signal.
    pub code: Option<i32>,
}

impl ProcessExit {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs a child process to completion.
pub trait ProcessRunner {
    fn run(&self, invocation: &Invocation) -> Result<ProcessExit, AppError>;
}

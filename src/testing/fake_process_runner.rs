use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{Invocation, ProcessExit, ProcessRunner};

/// Records invocations and optionally writes files to simulate generator output.
pub struct FakeProcessRunner {
    pub invocations: Mutex<Vec<Invocation>>,
    /// Working directory observed while the child "ran".
    pub observed_cwd: Mutex<Option<PathBuf>>,
    pub exit_code: Option<i32>,
    pub writes: Vec<(PathBuf, String)>,
}

impl Default for FakeProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeProcessRunner {
    pub fn new() -> Self {
        Self {
            invocations: Mutex::new(Vec::new()),
            observed_cwd: Mutex::new(None),
            exit_code: Some(0),
            writes: Vec::new(),
        }
    }

    pub fn exiting_with(code: Option<i32>) -> Self {
        Self { exit_code: code, ..Self::new() }
    }

    /// Write `content` to `path` when the process runs.
    pub fn writing(mut self, path: PathBuf, content: &str) -> Self {
        self.writes.push((path, content.to_string()));
        self
    }

    pub fn invocation_count(&self) -> usize {
        self.invocations.lock().unwrap().len()
    }
}

impl ProcessRunner for FakeProcessRunner {
    fn run(&self, invocation: &Invocation) -> Result<ProcessExit, AppError> {
        self.invocations.lock().unwrap().push(invocation.clone());
        *self.observed_cwd.lock().unwrap() = std::env::current_dir().ok();
        for (path, content) in &self.writes {
            fs::write(path, content)?;
        }
        Ok(ProcessExit { code: self.exit_code })
    }
}

use std::process::Command;

use crate::domain::AppError;
use crate::ports::{Invocation, ProcessExit, ProcessRunner};

/// Runs child processes with inherited stdio and waits for them.
#[derive(Debug, Clone, Default)]
pub struct CommandProcessRunner;

impl CommandProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for CommandProcessRunner {
    fn run(&self, invocation: &Invocation) -> Result<ProcessExit, AppError> {
        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args).current_dir(&invocation.cwd);
        for (name, value) in &invocation.env {
            command.env(name, value);
        }

        tracing::debug!(
            program = %invocation.program.display(),
            cwd = %invocation.cwd.display(),
            env_vars = invocation.env.len(),
            "spawning child process"
        );

        let status = command.status().map_err(|e| AppError::ProcessSpawn {
            program: invocation.program.display().to_string(),
            details: e.to_string(),
        })?;

        Ok(ProcessExit { code: status.code() })
    }
}

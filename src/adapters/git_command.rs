use crate::domain::AppError;
use crate::ports::GitPort;
use std::path::PathBuf;
use std::process::{Command, Output};

#[derive(Debug, Clone)]
pub struct GitCommandAdapter {
    program: PathBuf,
    root: PathBuf,
}

impl GitCommandAdapter {
    /// Drive the git executable at `program` inside the repository at `root`.
    pub fn new(program: PathBuf, root: PathBuf) -> Self {
        Self { program, root }
    }

    fn run_output(&self, args: &[&str]) -> Result<Output, AppError> {
        let mut command = Command::new(&self.program);
        command.args(args);
        command.current_dir(&self.root);
        tracing::debug!(command = %format!("git {}", args.join(" ")), "running git");

        let output = command.output().map_err(|e| AppError::GitError {
            command: format!("git {}", args.join(" ")),
            details: e.to_string(),
        })?;

        if !output.status.success() {
            // `git commit` reports "nothing to commit" on stdout.
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
            let details = if !stderr.is_empty() {
                stderr
            } else if !stdout.is_empty() {
                stdout
            } else {
                "Unknown error".to_string()
            };
            return Err(AppError::GitError { command: format!("git {}", args.join(" ")), details });
        }

        Ok(output)
    }

    fn run(&self, args: &[&str]) -> Result<String, AppError> {
        let output = self.run_output(args)?;
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl GitPort for GitCommandAdapter {
    fn run_command(&self, args: &[&str]) -> Result<String, AppError> {
        self.run(args)
    }

    fn init_repository(&self, branch: &str) -> Result<(), AppError> {
        self.run(&["init"])?;
        self.run(&["config", "init.defaultBranch", branch])?;
        // HEAD is unborn right after init, so pointing it at the branch renames it.
        let head_ref = format!("refs/heads/{}", branch);
        self.run(&["symbolic-ref", "HEAD", &head_ref])?;
        Ok(())
    }

    fn has_remote(&self, name: &str) -> Result<bool, AppError> {
        let output = self.run(&["remote"])?;
        Ok(output.lines().any(|line| line.trim() == name))
    }

    fn add_remote(&self, name: &str, url: &str) -> Result<(), AppError> {
        self.run(&["remote", "add", name, url])?;
        Ok(())
    }

    fn stage_all(&self) -> Result<(), AppError> {
        self.run(&["add", "-A"])?;
        Ok(())
    }

    fn has_pending_changes(&self) -> Result<bool, AppError> {
        let output = self.run(&["status", "--porcelain"])?;
        Ok(!output.is_empty())
    }

    fn commit(&self, message: &str) -> Result<(), AppError> {
        self.run(&["commit", "-m", message])?;
        Ok(())
    }

    fn push(&self) -> Result<(), AppError> {
        self.run(&["push"])?;
        Ok(())
    }

    fn push_set_upstream(&self, remote: &str, branch: &str) -> Result<(), AppError> {
        self.run(&["push", "-u", remote, branch])?;
        Ok(())
    }
}

use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::GitPort;

/// In-memory git double that mimics the repository state machine.
#[derive(Default)]
pub struct FakeGit {
    pub commands: Mutex<Vec<Vec<String>>>,
    pub remotes: Mutex<Vec<(String, String)>>,
    pub initialized_branch: Mutex<Option<String>>,
    pub commit_messages: Mutex<Vec<String>>,
    /// Whether `stage_all` will have something to commit.
    pub pending: Mutex<bool>,
    pub fail_commit: bool,
    pub fail_push: bool,
    pub fail_push_upstream: bool,
}

impl FakeGit {
    pub fn new() -> Self {
        Self { pending: Mutex::new(true), ..Self::default() }
    }

    pub fn clean() -> Self {
        Self::default()
    }

    pub fn with_remote(self, name: &str, url: &str) -> Self {
        self.remotes.lock().unwrap().push((name.to_string(), url.to_string()));
        self
    }

    pub fn recorded(&self) -> Vec<Vec<String>> {
        self.commands.lock().unwrap().clone()
    }

    fn record(&self, args: &[&str]) {
        self.commands.lock().unwrap().push(args.iter().map(|arg| arg.to_string()).collect());
    }

    fn failure(args: &[&str], details: &str) -> AppError {
        AppError::GitError { command: format!("git {}", args.join(" ")), details: details.into() }
    }
}

impl GitPort for FakeGit {
    fn run_command(&self, args: &[&str]) -> Result<String, AppError> {
        self.record(args);
        Ok(String::new())
    }

    fn init_repository(&self, branch: &str) -> Result<(), AppError> {
        self.record(&["init"]);
        *self.initialized_branch.lock().unwrap() = Some(branch.to_string());
        Ok(())
    }

    fn has_remote(&self, name: &str) -> Result<bool, AppError> {
        Ok(self.remotes.lock().unwrap().iter().any(|(existing, _)| existing == name))
    }

    fn add_remote(&self, name: &str, url: &str) -> Result<(), AppError> {
        self.record(&["remote", "add", name, url]);
        self.remotes.lock().unwrap().push((name.to_string(), url.to_string()));
        Ok(())
    }

    fn stage_all(&self) -> Result<(), AppError> {
        self.record(&["add", "-A"]);
        Ok(())
    }

    fn has_pending_changes(&self) -> Result<bool, AppError> {
        Ok(*self.pending.lock().unwrap())
    }

    fn commit(&self, message: &str) -> Result<(), AppError> {
        let args = ["commit", "-m", message];
        self.record(&args);
        let mut pending = self.pending.lock().unwrap();
        if !*pending {
            return Err(Self::failure(&args, "nothing to commit, working tree clean"));
        }
        if self.fail_commit {
            return Err(Self::failure(&args, "Author identity unknown"));
        }
        *pending = false;
        self.commit_messages.lock().unwrap().push(message.to_string());
        Ok(())
    }

    fn push(&self) -> Result<(), AppError> {
        self.record(&["push"]);
        if self.fail_push {
            return Err(Self::failure(&["push"], "The current branch main has no upstream branch."));
        }
        Ok(())
    }

    fn push_set_upstream(&self, remote: &str, branch: &str) -> Result<(), AppError> {
        let args = ["push", "-u", remote, branch];
        self.record(&args);
        if self.fail_push_upstream {
            return Err(Self::failure(&args, "Could not read from remote repository."));
        }
        Ok(())
    }
}

use crate::domain::AppError;

pub trait GitPort {
    /// Execute an arbitrary git command in the repository root (fallback).
    fn run_command(&self, args: &[&str]) -> Result<String, AppError>;

    /// Create a repository whose initial branch is `branch`.
    fn init_repository(&self, branch: &str) -> Result<(), AppError>;

    /// Check whether a remote with this name is configured.
    fn has_remote(&self, name: &str) -> Result<bool, AppError>;

    /// Add a remote.
    fn add_remote(&self, name: &str, url: &str) -> Result<(), AppError>;

    /// Stage every pending change, including deletions and untracked files.
    fn stage_all(&self) -> Result<(), AppError>;

    /// Check whether the working tree or index differs from HEAD.
    fn has_pending_changes(&self) -> Result<bool, AppError>;

    /// Commit the index with a message.
    fn commit(&self, message: &str) -> Result<(), AppError>;

    /// Push the current branch to its configured upstream.
    fn push(&self) -> Result<(), AppError>;

    /// Push `branch` to `remote` and record it as the upstream.
    fn push_set_upstream(&self, remote: &str, branch: &str) -> Result<(), AppError>;
}

impl<T: GitPort + ?Sized> GitPort for &T {
    fn run_command(&self, args: &[&str]) -> Result<String, AppError> {
        (**self).run_command(args)
    }

    fn init_repository(&self, branch: &str) -> Result<(), AppError> {
        (**self).init_repository(branch)
    }

    fn has_remote(&self, name: &str) -> Result<bool, AppError> {
        (**self).has_remote(name)
    }

    fn add_remote(&self, name: &str, url: &str) -> Result<(), AppError> {
        (**self).add_remote(name, url)
    }

    fn stage_all(&self) -> Result<(), AppError> {
        (**self).stage_all()
    }

    fn has_pending_changes(&self) -> Result<bool, AppError> {
        (**self).has_pending_changes()
    }

    fn commit(&self, message: &str) -> Result<(), AppError> {
        (**self).commit(message)
    }

    fn push(&self) -> Result<(), AppError> {
        (**self).push()
    }

    fn push_set_upstream(&self, remote: &str, branch: &str) -> Result<(), AppError> {
        (**self).push_set_upstream(remote, branch)
    }
}

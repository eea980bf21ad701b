//! Repository publishing: init, remote, ignore file, commit and push.

use std::fs;

use chrono::{DateTime, Local};

use crate::domain::publish::{commit_message, ignore_file_content};
use crate::domain::{AppError, CommitOutcome, PublishConfig, PushOutcome, SiteLayout};
use crate::ports::GitPort;

/// Outcome of the publish stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOutcome {
    pub initialized: bool,
    pub remote_added: bool,
    pub ignore_file_written: bool,
    pub commit: CommitOutcome,
    pub push: PushOutcome,
}

/// Bring the site root to a pushed state.
///
/// Every step is idempotent; an empty commit is tolerated and a failed push is retried once
/// with an explicit upstream.
pub fn publish_repository(
    git: &impl GitPort,
    layout: &SiteLayout,
    config: &PublishConfig,
    now: &DateTime<Local>,
) -> Result<RepositoryOutcome, AppError> {
    let initialized = !layout.git_dir().exists();
    if initialized {
        tracing::info!(branch = %config.git.branch, "initializing repository");
        git.init_repository(&config.git.branch)?;
    }

    let remote_added = !git.has_remote(&config.git.remote)?;
    if remote_added {
        tracing::info!(remote = %config.git.remote, url = %config.git.remote_url, "adding remote");
        git.add_remote(&config.git.remote, &config.git.remote_url)?;
    }

    let ignore_file_written = ensure_ignore_file(layout)?;

    git.stage_all()?;
    let commit = commit_all(git, &commit_message(now))?;
    let push = push_with_upstream_retry(git, config)?;

    Ok(RepositoryOutcome { initialized, remote_added, ignore_file_written, commit, push })
}

fn ensure_ignore_file(layout: &SiteLayout) -> Result<bool, AppError> {
    let path = layout.ignore_file();
    if path.exists() {
        return Ok(false);
    }
    fs::write(&path, ignore_file_content())?;
    tracing::info!(path = %path.display(), "wrote ignore file");
    Ok(true)
}

fn commit_all(git: &impl GitPort, message: &str) -> Result<CommitOutcome, AppError> {
    match git.commit(message) {
        Ok(()) => Ok(CommitOutcome::Committed),
        Err(err) => {
            if git.has_pending_changes()? {
                return Err(err);
            }
            tracing::info!("nothing changed since last publish");
            Ok(CommitOutcome::NothingToCommit)
        }
    }
}

fn push_with_upstream_retry(
    git: &impl GitPort,
    config: &PublishConfig,
) -> Result<PushOutcome, AppError> {
    match git.push() {
        Ok(()) => Ok(PushOutcome::Pushed),
        Err(err) => {
            tracing::info!(error = %err, "plain push failed, retrying with upstream");
            git.push_set_upstream(&config.git.remote, &config.git.branch)?;
            Ok(PushOutcome::PushedWithUpstream)
        }
    }
}

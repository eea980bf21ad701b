//! Scoped change of the process working directory.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Changes the working directory on creation and restores the previous one on drop.
///
/// Restoration also happens when the guarded code returns early with an error or unwinds.
#[derive(Debug)]
pub struct WorkingDirGuard {
    previous: PathBuf,
}

impl WorkingDirGuard {
    pub fn enter(dir: &Path) -> Result<Self, AppError> {
        let previous = env::current_dir()?;
        env::set_current_dir(dir).map_err(|e| {
            io::Error::new(e.kind(), format!("cannot enter {}: {}", dir.display(), e))
        })?;
        tracing::debug!(from = %previous.display(), to = %dir.display(), "entered directory");
        Ok(Self { previous })
    }
}

impl Drop for WorkingDirGuard {
    fn drop(&mut self) {
        if let Err(err) = env::set_current_dir(&self.previous) {
            tracing::warn!(
                dir = %self.previous.display(),
                error = %err,
                "failed to restore working directory"
            );
        }
    }
}

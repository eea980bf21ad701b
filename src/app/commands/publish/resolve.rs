//! Interpreter and git executable resolution.

use std::path::PathBuf;

use crate::domain::{AppError, PublishConfig};
use crate::ports::ExecutableLocator;

/// Resolve the Python interpreter from the configured candidates, in order.
pub fn resolve_interpreter(
    locator: &impl ExecutableLocator,
    config: &PublishConfig,
) -> Result<PathBuf, AppError> {
    let candidates = config.runtime.interpreter_candidates();
    match candidates.resolve_first(|candidate| locator.locate(candidate)) {
        Some((candidate, path)) => {
            tracing::info!(candidate, path = %path.display(), "resolved interpreter");
            Ok(path)
        }
        None => Err(AppError::MissingRuntime { tried: candidates.entries().to_vec() }),
    }
}

/// Resolve the git executable. Checked once, right before publishing.
pub fn resolve_git(
    locator: &impl ExecutableLocator,
    config: &PublishConfig,
) -> Result<PathBuf, AppError> {
    let candidates = config.git.candidates();
    match candidates.resolve_first(|candidate| locator.locate(candidate)) {
        Some((candidate, path)) => {
            tracing::info!(candidate, path = %path.display(), "resolved git");
            Ok(path)
        }
        None => Err(AppError::MissingVcs { tried: candidates.entries().to_vec() }),
    }
}

use std::path::PathBuf;

/// Resolves a candidate name or path to an invocable executable.
pub trait ExecutableLocator {
    /// Absolute path of the candidate if it exists and can be invoked.
    fn locate(&self, candidate: &str) -> Option<PathBuf>;
}

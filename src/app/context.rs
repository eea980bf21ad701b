use std::path::PathBuf;

use crate::ports::{ExecutableLocator, GitPort, ProcessRunner};

/// Application context holding the external-tool adapters a publish run needs.
///
/// Git is connected lazily because its executable is only resolved right before publishing.
pub struct AppContext<L, R, F> {
    locator: L,
    runner: R,
    connect_git: F,
}

impl<L, R, G, F> AppContext<L, R, F>
where
    L: ExecutableLocator,
    R: ProcessRunner,
    G: GitPort,
    F: Fn(PathBuf) -> G,
{
    /// Create a new application context.
    pub fn new(locator: L, runner: R, connect_git: F) -> Self {
        Self { locator, runner, connect_git }
    }

    /// Get a reference to the executable locator.
    pub fn locator(&self) -> &L {
        &self.locator
    }

    /// Get a reference to the process runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Connect a git adapter driving the executable at `program`.
    pub fn git(&self, program: PathBuf) -> G {
        (self.connect_git)(program)
    }
}

//! Generator execution inside the canonical output directory.

use std::fs;
use std::path::Path;

use crate::app::working_dir::WorkingDirGuard;
use crate::domain::{AppError, SecretEnv, SiteLayout};
use crate::ports::{Invocation, ProcessRunner};

/// Run `<interpreter> <script>` with the output directory as working directory.
///
/// The previous working directory is restored whether or not the generator succeeds.
pub fn run_generator(
    runner: &impl ProcessRunner,
    interpreter: &Path,
    script: &Path,
    layout: &SiteLayout,
    secrets: &SecretEnv,
) -> Result<(), AppError> {
    let output_dir = layout.output_dir();
    fs::create_dir_all(output_dir)?;

    let _cwd = WorkingDirGuard::enter(output_dir)?;
    let invocation = Invocation {
        program: interpreter.to_path_buf(),
        args: vec![script.as_os_str().to_os_string()],
        cwd: output_dir.to_path_buf(),
        env: secrets.iter().map(|(name, value)| (name.to_string(), value.to_string())).collect(),
    };

    tracing::info!(script = %script.display(), cwd = %output_dir.display(), "running generator");
    let exit = runner.run(&invocation)?;
    if !exit.success() {
        return Err(AppError::ChildProcessFailure { code: exit.code });
    }
    Ok(())
}

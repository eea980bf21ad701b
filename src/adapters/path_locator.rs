//! Executable lookup on the filesystem and `PATH`.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::domain::is_path_like;
use crate::ports::ExecutableLocator;

/// Locates executables by path (relative to the site root) or by name on a search path.
///
/// A hit must answer `--version` successfully; stubs that exist but cannot run are skipped.
#[derive(Debug, Clone)]
pub struct PathExecutableLocator {
    root: PathBuf,
    search_path: Option<OsString>,
}

impl PathExecutableLocator {
    /// Search the current process `PATH`.
    pub fn from_env(root: PathBuf) -> Self {
        Self { root, search_path: env::var_os("PATH") }
    }

    pub fn with_search_path(root: PathBuf, search_path: impl Into<OsString>) -> Self {
        Self { root, search_path: Some(search_path.into()) }
    }

    fn find(&self, candidate: &str) -> Option<PathBuf> {
        if is_path_like(candidate) {
            let path = Path::new(candidate);
            let path = if path.is_absolute() { path.to_path_buf() } else { self.root.join(path) };
            return is_executable_file(&path).then_some(path);
        }

        let search_path = self.search_path.as_ref()?;
        env::split_paths(search_path)
            .filter(|dir| !dir.as_os_str().is_empty())
            .flat_map(|dir| executable_names(candidate).into_iter().map(move |n| dir.join(n)))
            .find(|path| is_executable_file(path))
    }
}

impl ExecutableLocator for PathExecutableLocator {
    fn locate(&self, candidate: &str) -> Option<PathBuf> {
        let path = self.find(candidate)?;
        // Symlinks stay unresolved: a venv interpreter must be invoked through its own path.
        let path = std::path::absolute(&path).unwrap_or(path);

        let probe = Command::new(&path)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        match probe {
            Ok(status) if status.success() => Some(path),
            Ok(status) => {
                tracing::debug!(candidate, code = ?status.code(), "candidate failed version probe");
                None
            }
            Err(err) => {
                tracing::debug!(candidate, error = %err, "candidate could not be invoked");
                None
            }
        }
    }
}

fn executable_names(name: &str) -> Vec<String> {
    if cfg!(windows) && Path::new(name).extension().is_none() {
        vec![format!("{}.exe", name), name.to_string()]
    } else {
        vec![name.to_string()]
    }
}

#[cfg(unix)]
fn is_executable_file(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata().map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0).unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable_file(path: &Path) -> bool {
    path.is_file()
}

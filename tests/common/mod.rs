//! Shared testing utilities for moviepub CLI tests.

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Interpreter stub: answers the `--version` probe and runs the "script" as shell.
const PYTHON_STUB: &str = r#"#!/bin/sh
if [ "$1" = "--version" ]; then
  echo 'Python 3.12.0'
  exit 0
fi
exec /bin/sh "$@"
"#;

/// Testing harness providing an isolated site root, a bare remote and a stub interpreter.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    site: PathBuf,
    remote: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a site with a stub virtual environment, an `.env` file and a local bare remote.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let site = root.path().join("site");
        let remote = root.path().join("remote.git");
        fs::create_dir_all(&site).expect("Failed to create site directory");
        fs::create_dir_all(&remote).expect("Failed to create remote directory");

        let output = std::process::Command::new("git")
            .args(["init", "--bare"])
            .current_dir(&remote)
            .output()
            .expect("git init --bare failed");
        assert!(
            output.status.success(),
            "git init --bare failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        let ctx = Self { root, site, remote };
        ctx.write_python_stub();
        ctx.write_script("exit 0\n");
        ctx.write_env("TMDB_API_KEY=abc123\n");
        ctx.write_config(&format!("[git]\nremote_url = \"{}\"\n", ctx.remote.display()));
        ctx
    }

    pub fn site(&self) -> &Path {
        &self.site
    }

    pub fn remote(&self) -> &Path {
        &self.remote
    }

    pub fn home(&self) -> PathBuf {
        self.root.path().join("home")
    }

    /// Build a command invoking the compiled `moviepub` binary inside the site root.
    pub fn cli(&self) -> Command {
        let home = self.home();
        fs::create_dir_all(&home).expect("Failed to create home directory");

        let mut cmd = Command::cargo_bin("moviepub").expect("Failed to locate moviepub binary");
        cmd.current_dir(&self.site)
            .env("HOME", &home)
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env("GIT_AUTHOR_NAME", "Test User")
            .env("GIT_AUTHOR_EMAIL", "test@example.com")
            .env("GIT_COMMITTER_NAME", "Test User")
            .env("GIT_COMMITTER_EMAIL", "test@example.com")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Replace the generator script body (run by the stub interpreter as shell).
    pub fn write_script(&self, body: &str) {
        fs::write(self.site.join("movie_finder.py"), body).expect("Failed to write script");
    }

    pub fn remove_script(&self) {
        fs::remove_file(self.site.join("movie_finder.py")).expect("Failed to remove script");
    }

    pub fn write_env(&self, content: &str) {
        fs::write(self.site.join(".env"), content).expect("Failed to write .env");
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.site.join("moviepub.toml"), content).expect("Failed to write config");
    }

    fn write_python_stub(&self) {
        let path = self.site.join(".venv/bin/python");
        fs::create_dir_all(path.parent().unwrap()).expect("Failed to create venv");
        fs::write(&path, PYTHON_STUB).expect("Failed to write python stub");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to mark python stub executable");
    }

    /// Run git against the bare remote and return trimmed stdout.
    pub fn remote_git(&self, args: &[&str]) -> String {
        let output = std::process::Command::new("git")
            .arg("--git-dir")
            .arg(&self.remote)
            .args(args)
            .output()
            .expect("git against remote failed");
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }

    /// Files tracked on the remote `main` branch.
    pub fn remote_files(&self) -> Vec<String> {
        self.remote_git(&["ls-tree", "-r", "--name-only", "main"])
            .lines()
            .map(|line| line.to_string())
            .collect()
    }
}

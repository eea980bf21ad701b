//! Publish configuration domain models.

use std::path::{Component, Path};

use serde::Deserialize;
use url::Url;

use crate::domain::{AppError, CandidateList};

/// Configuration for a publish run, optionally loaded from `moviepub.toml`.
///
/// Every field defaults to the fixed value used when no file is present.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PublishConfig {
    /// Published site layout.
    #[serde(default)]
    pub site: SiteConfig,
    /// Repository and remote settings.
    #[serde(default)]
    pub git: GitConfig,
    /// Secret file settings.
    #[serde(default)]
    pub secrets: SecretsConfig,
    /// Interpreter and generator script discovery.
    #[serde(default)]
    pub runtime: RuntimeConfig,
}

impl PublishConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.site.validate()?;
        self.git.validate()?;
        self.secrets.validate()?;
        self.runtime.validate()?;
        Ok(())
    }

    /// Public URL of the canonical output directory.
    pub fn published_url(&self) -> Result<Url, AppError> {
        let mut base = self.site.url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(&format!("{}/", self.site.output_dir.trim_matches('/'))).map_err(|e| {
            AppError::config_error(format!(
                "Cannot join output_dir '{}' onto site url '{}': {}",
                self.site.output_dir, self.site.url, e
            ))
        })
    }
}

/// Site layout: the canonical output directory and its public URL.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory under the site root that receives generated files.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Base URL the site root is served from.
    #[serde(default = "default_site_url")]
    pub url: Url,
    /// Generated HTML report name.
    #[serde(default = "default_html_name")]
    pub html_file: String,
    /// Generated CSV report name.
    #[serde(default = "default_csv_name")]
    pub csv_file: String,
    /// Name the HTML report is published under.
    #[serde(default = "default_index_name")]
    pub index_file: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            url: default_site_url(),
            html_file: default_html_name(),
            csv_file: default_csv_name(),
            index_file: default_index_name(),
        }
    }
}

impl SiteConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        let output_dir = Path::new(&self.output_dir);
        if self.output_dir.trim().is_empty()
            || output_dir.components().any(|c| !matches!(c, Component::Normal(_)))
        {
            return Err(AppError::config_error(format!(
                "site.output_dir must be a relative path inside the site root, got '{}'",
                self.output_dir
            )));
        }
        for (field, value) in [
            ("site.html_file", &self.html_file),
            ("site.csv_file", &self.csv_file),
            ("site.index_file", &self.index_file),
        ] {
            validate_file_name(field, value)?;
        }
        if !matches!(self.url.scheme(), "http" | "https") || self.url.cannot_be_a_base() {
            return Err(AppError::config_error(format!(
                "site.url must be an absolute http(s) URL, got '{}'",
                self.url
            )));
        }
        Ok(())
    }
}

/// Repository and remote settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GitConfig {
    /// Remote name.
    #[serde(default = "default_remote")]
    pub remote: String,
    /// Remote location (URL or local path).
    #[serde(default = "default_remote_url")]
    pub remote_url: String,
    /// Branch to publish.
    #[serde(default = "default_branch")]
    pub branch: String,
    /// Git executable candidates in preference order.
    #[serde(default = "default_git_candidates")]
    pub executables: Vec<String>,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            remote: default_remote(),
            remote_url: default_remote_url(),
            branch: default_branch(),
            executables: default_git_candidates(),
        }
    }
}

impl GitConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        for (field, value) in [
            ("git.remote", &self.remote),
            ("git.remote_url", &self.remote_url),
            ("git.branch", &self.branch),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::config_error(format!("{} must not be empty", field)));
            }
        }
        if self.branch.contains(char::is_whitespace) || self.remote.contains(char::is_whitespace) {
            return Err(AppError::config_error(
                "git.branch and git.remote must not contain whitespace",
            ));
        }
        if self.executables.is_empty() {
            return Err(AppError::config_error("git.executables must list at least one candidate"));
        }
        Ok(())
    }

    pub fn candidates(&self) -> CandidateList {
        CandidateList::new(self.executables.iter().cloned())
    }
}

/// Secret file settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SecretsConfig {
    /// Secret file, relative to the site root.
    #[serde(default = "default_secret_file")]
    pub file: String,
    /// Variable that must be present and non-blank.
    #[serde(default = "default_required_key")]
    pub required_key: String,
}

impl Default for SecretsConfig {
    fn default() -> Self {
        Self { file: default_secret_file(), required_key: default_required_key() }
    }
}

impl SecretsConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.file.trim().is_empty() {
            return Err(AppError::config_error("secrets.file must not be empty"));
        }
        if self.required_key.trim().is_empty() || self.required_key.contains('=') {
            return Err(AppError::config_error(format!(
                "secrets.required_key is not a valid variable name: '{}'",
                self.required_key
            )));
        }
        Ok(())
    }
}

/// Interpreter and generator script discovery.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuntimeConfig {
    /// Interpreter candidates. Path-like entries are relative to the site root.
    #[serde(default = "default_interpreters")]
    pub interpreters: Vec<String>,
    /// Generator script basenames in preference order.
    #[serde(default = "default_scripts")]
    pub scripts: Vec<String>,
    /// Nested directory checked after the site root for each script.
    #[serde(default = "default_script_subdir")]
    pub script_subdir: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            interpreters: default_interpreters(),
            scripts: default_scripts(),
            script_subdir: default_script_subdir(),
        }
    }
}

impl RuntimeConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.interpreters.is_empty() {
            return Err(AppError::config_error(
                "runtime.interpreters must list at least one candidate",
            ));
        }
        if self.scripts.is_empty() {
            return Err(AppError::config_error("runtime.scripts must list at least one script"));
        }
        for script in &self.scripts {
            validate_file_name("runtime.scripts", script)?;
        }
        Ok(())
    }

    pub fn interpreter_candidates(&self) -> CandidateList {
        CandidateList::new(self.interpreters.iter().cloned())
    }
}

fn validate_file_name(field: &str, value: &str) -> Result<(), AppError> {
    let mut components = Path::new(value).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(AppError::config_error(format!(
            "{} must be a plain file name, got '{}'",
            field, value
        ))),
    }
}

fn default_output_dir() -> String {
    "movies".to_string()
}

fn default_site_url() -> Url {
    Url::parse("https://new-streaming-movies.github.io/").expect("Default site URL must be valid")
}

fn default_html_name() -> String {
    "new_streaming_movies.html".to_string()
}

fn default_csv_name() -> String {
    "new_streaming_movies.csv".to_string()
}

fn default_index_name() -> String {
    "index.html".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_remote_url() -> String {
    "https://github.com/new-streaming-movies/new-streaming-movies.github.io.git".to_string()
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_git_candidates() -> Vec<String> {
    if cfg!(windows) {
        vec!["git".to_string(), r"C:\Program Files\Git\cmd\git.exe".to_string()]
    } else {
        vec!["git".to_string(), "/usr/bin/git".to_string(), "/usr/local/bin/git".to_string()]
    }
}

fn default_secret_file() -> String {
    ".env".to_string()
}

fn default_required_key() -> String {
    "TMDB_API_KEY".to_string()
}

fn default_interpreters() -> Vec<String> {
    let venv_python = if cfg!(windows) { r".venv\Scripts\python.exe" } else { ".venv/bin/python" };
    vec![venv_python.to_string(), "py".to_string(), "python3".to_string(), "python".to_string()]
}

fn default_scripts() -> Vec<String> {
    vec!["movie_finder.py".to_string(), "main.py".to_string()]
}

fn default_script_subdir() -> String {
    "Best New Movies".to_string()
}

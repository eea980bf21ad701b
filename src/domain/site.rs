//! Site root layout: where the generator, its outputs and the secret file live.

use std::path::{Path, PathBuf};

use crate::domain::PublishConfig;

/// Resolved paths for a site root under a given configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLayout {
    root: PathBuf,
    output_dir: PathBuf,
    secret_file: PathBuf,
}

impl SiteLayout {
    pub fn new(root: impl Into<PathBuf>, config: &PublishConfig) -> Self {
        let root = root.into();
        let output_dir = root.join(&config.site.output_dir);
        let secret_file = root.join(&config.secrets.file);
        Self { root, output_dir, secret_file }
    }

    /// Site root; also the fallback location for generator outputs.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Canonical output directory that gets published.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn secret_file(&self) -> &Path {
        &self.secret_file
    }

    pub fn git_dir(&self) -> PathBuf {
        self.root.join(".git")
    }

    pub fn ignore_file(&self) -> PathBuf {
        self.root.join(".gitignore")
    }

    /// Script candidates: each basename at the root, then in the nested subdirectory.
    pub fn script_candidates(&self, config: &PublishConfig) -> Vec<PathBuf> {
        let nested = self.root.join(&config.runtime.script_subdir);
        config
            .runtime
            .scripts
            .iter()
            .flat_map(|name| [self.root.join(name), nested.join(name)])
            .collect()
    }

    /// Output files the generator may leave in the fallback location.
    pub fn output_files(&self, config: &PublishConfig) -> [OutputFile; 2] {
        [
            OutputFile {
                source: self.root.join(&config.site.html_file),
                destination: self.output_dir.join(&config.site.index_file),
            },
            OutputFile {
                source: self.root.join(&config.site.csv_file),
                destination: self.output_dir.join(&config.site.csv_file),
            },
        ]
    }
}

/// A generator output and where it is published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub source: PathBuf,
    pub destination: PathBuf,
}

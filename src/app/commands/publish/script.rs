//! Generator script discovery.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::domain::{AppError, PublishConfig, SiteLayout};

/// Return the first existing script candidate.
///
/// When nothing matches, the error lists every `.py` file under the root to help locate it.
pub fn locate_script(layout: &SiteLayout, config: &PublishConfig) -> Result<PathBuf, AppError> {
    let candidates = layout.script_candidates(config);
    if let Some(script) = candidates.iter().find(|path| path.is_file()) {
        tracing::info!(script = %script.display(), "located generator script");
        return Ok(script.clone());
    }

    let found = discover_python_files(layout.root());
    Err(AppError::MissingScript { searched: candidates, found })
}

/// All `.py` files below `root`, skipping hidden directories such as `.git` and `.venv`.
fn discover_python_files(root: &Path) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry.file_name()))
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "py"))
        .collect();
    found.sort();
    found
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

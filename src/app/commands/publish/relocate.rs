//! Moves generator outputs from the site root into the output directory.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::{AppError, OutputFile, PublishConfig, SiteLayout};

/// Move outputs the generator left in the site root. Absent files are skipped.
///
/// Returns the files that were moved.
pub fn relocate_outputs(
    layout: &SiteLayout,
    config: &PublishConfig,
) -> Result<Vec<OutputFile>, AppError> {
    let mut moved = Vec::new();
    for file in layout.output_files(config) {
        if !file.source.is_file() {
            tracing::debug!(source = %file.source.display(), "nothing to relocate");
            continue;
        }
        fs::create_dir_all(layout.output_dir())?;
        move_file(&file.source, &file.destination)?;
        tracing::info!(
            from = %file.source.display(),
            to = %file.destination.display(),
            "relocated output"
        );
        moved.push(file);
    }
    Ok(moved)
}

/// Move `from` to `to`, replacing any existing destination.
fn move_file(from: &Path, to: &Path) -> io::Result<()> {
    if to.is_file() {
        fs::remove_file(to)?;
    }
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(rename_err) => {
            // Rename cannot cross filesystems; copy and remove instead.
            fs::copy(from, to).map_err(|_| rename_err)?;
            fs::remove_file(from)
        }
    }
}

//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use chrono::Local;

use crate::adapters::{CommandProcessRunner, GitCommandAdapter, PathExecutableLocator};
use crate::app::{AppContext, commands::publish, configuration::load_config};
use crate::domain::SiteLayout;

pub use crate::app::commands::publish::{PublishOutcome, RepositoryOutcome};
pub use crate::domain::AppError;

/// Run the publish pipeline for the site rooted at the current directory.
pub fn publish() -> Result<PublishOutcome, AppError> {
    let root = std::env::current_dir()?;
    publish_at(&root)
}

/// Run the publish pipeline for the site rooted at `root`.
pub fn publish_at(root: &Path) -> Result<PublishOutcome, AppError> {
    let root = std::path::absolute(root)?;
    let config = load_config(&root)?;
    let layout = SiteLayout::new(root.clone(), &config);

    let git_root = root.clone();
    let ctx = AppContext::new(
        PathExecutableLocator::from_env(root),
        CommandProcessRunner::new(),
        move |program: PathBuf| GitCommandAdapter::new(program, git_root.clone()),
    );

    tracing::info!(root = %layout.root().display(), "starting publish run");
    publish::execute(&ctx, &layout, &config, &Local::now())
}

//! The publish pipeline: resolve, locate, load secrets, generate, relocate, publish.
//!
//! Stages run strictly in order and the first failure aborts the run. The only softened
//! outcomes are an absent fallback output (nothing to relocate) and an empty commit.

mod generator;
mod relocate;
mod repository;
mod resolve;
mod script;
mod secrets;

use std::path::PathBuf;

use chrono::{DateTime, Local};
use url::Url;

use crate::app::AppContext;
use crate::domain::{AppError, OutputFile, PublishConfig, SiteLayout};
use crate::ports::{ExecutableLocator, GitPort, ProcessRunner};

pub use generator::run_generator;
pub use relocate::relocate_outputs;
pub use repository::{RepositoryOutcome, publish_repository};
pub use resolve::{resolve_git, resolve_interpreter};
pub use script::locate_script;
pub use secrets::load_secrets;

/// Summary of a completed publish run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishOutcome {
    pub interpreter: PathBuf,
    pub script: PathBuf,
    pub relocated: Vec<OutputFile>,
    pub repository: RepositoryOutcome,
    /// Public URL of the published output directory.
    pub site_url: Url,
}

/// Execute the full pipeline for the site rooted at `layout`.
pub fn execute<L, R, G, F>(
    ctx: &AppContext<L, R, F>,
    layout: &SiteLayout,
    config: &PublishConfig,
    now: &DateTime<Local>,
) -> Result<PublishOutcome, AppError>
where
    L: ExecutableLocator,
    R: ProcessRunner,
    G: GitPort,
    F: Fn(PathBuf) -> G,
{
    let site_url = config.published_url()?;

    let interpreter = resolve_interpreter(ctx.locator(), config)?;
    let script = locate_script(layout, config)?;
    let secrets = load_secrets(layout, config)?;

    run_generator(ctx.runner(), &interpreter, &script, layout, &secrets)?;
    let relocated = relocate_outputs(layout, config)?;

    let git_program = resolve_git(ctx.locator(), config)?;
    let git = ctx.git(git_program);
    let repository = publish_repository(&git, layout, config, now)?;

    Ok(PublishOutcome { interpreter, script, relocated, repository, site_url })
}

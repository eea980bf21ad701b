//! CLI Adapter.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "moviepub")]
#[command(version)]
#[command(
    about = "Generate the new-streaming-movies report and publish it to the static site",
    long_about = "Runs the movie finder script from the current directory, moves its report into \
the site's output directory, then commits and pushes the site. Set RUST_LOG=info to follow each stage."
)]
struct Cli {}

/// Entry point for the CLI.
pub fn run() {
    let _cli = Cli::parse();
    init_logging();

    let result: Result<(), AppError> = crate::app::api::publish().map(|outcome| {
        println!("✅ Published movie list to {}", outcome.site_url);
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    // RUST_LOG overrides the default, which keeps stderr quiet apart from warnings.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

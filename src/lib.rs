//! moviepub: generate the new-streaming-movies report and publish it to a static site.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::api::{PublishOutcome, RepositoryOutcome, publish, publish_at};
pub use domain::{AppError, CommitOutcome, PublishConfig, PushOutcome};

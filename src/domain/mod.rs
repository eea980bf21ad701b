pub mod candidates;
pub mod configuration;
pub mod error;
pub mod publish;
pub mod secrets;
pub mod site;

pub use candidates::{CandidateList, is_path_like};
pub use configuration::{GitConfig, PublishConfig, RuntimeConfig, SecretsConfig, SiteConfig};
pub use error::AppError;
pub use publish::{CommitOutcome, PushOutcome};
pub use secrets::SecretEnv;
pub use site::{OutputFile, SiteLayout};

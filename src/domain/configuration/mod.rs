mod publish_config;

pub use publish_config::{GitConfig, PublishConfig, RuntimeConfig, SecretsConfig, SiteConfig};

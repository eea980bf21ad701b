//! Secret file loading.

use std::fs;
use std::io::ErrorKind;

use crate::domain::{AppError, PublishConfig, SecretEnv, SiteLayout};

/// Load the secret file and require the configured key.
///
/// A missing file loads nothing, so the required-key check reports it.
pub fn load_secrets(layout: &SiteLayout, config: &PublishConfig) -> Result<SecretEnv, AppError> {
    let path = layout.secret_file();
    let env = match fs::read_to_string(path) {
        Ok(content) => SecretEnv::parse(&content),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "secret file not found");
            SecretEnv::default()
        }
        Err(err) => return Err(err.into()),
    };

    env.require(&config.secrets.required_key, path)?;
    tracing::info!(path = %path.display(), variables = env.len(), "loaded secrets");
    Ok(env)
}

//! Publish configuration loading from the site root.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, PublishConfig};

/// Optional configuration file in the site root.
pub const CONFIG_FILE: &str = "moviepub.toml";

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Load `moviepub.toml` from `root`, falling back to defaults when the file is absent.
pub fn load_config(root: &Path) -> Result<PublishConfig, AppError> {
    let path = config_path(root);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(PublishConfig::default());
        }
        Err(err) => return Err(err.into()),
    };
    tracing::info!(path = %path.display(), "loaded config file");
    parse_config_content(&content)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<PublishConfig, AppError> {
    let config: PublishConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

//! Secret file parsing (`NAME=value` per line).

use std::path::Path;

use crate::domain::AppError;

/// Environment variables loaded from the secret file, in file order.
///
/// Applied to the generator's environment rather than to this process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretEnv {
    vars: Vec<(String, String)>,
}

impl SecretEnv {
    /// Parse secret file content. Blank lines, `#` comments and lines without `=` are skipped.
    pub fn parse(content: &str) -> Self {
        let mut env = SecretEnv::default();
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        for line in content.lines() {
            let trimmed = line.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let Some((name, value)) = line.split_once('=') else {
                continue;
            };
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            env.set(name, value);
        }
        env
    }

    /// Set a variable; a later assignment replaces an earlier one.
    pub fn set(&mut self, name: &str, value: &str) {
        match self.vars.iter_mut().find(|(existing, _)| existing == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.vars.push((name.to_string(), value.to_string())),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.iter().find(|(existing, _)| existing == name).map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Ensure `key` is present with non-blank content.
    pub fn require(&self, key: &str, file: &Path) -> Result<&str, AppError> {
        match self.get(key) {
            Some(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(AppError::MissingSecret { key: key.to_string(), file: file.to_path_buf() }),
        }
    }
}

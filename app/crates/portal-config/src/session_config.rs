use crate::{APP_DATA_DIR_NAME, ConfigError, ConfigErrorResult, DEFAULT_CREDENTIAL_KEY};

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Where the bearer credential is persisted between runs
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Directory holding the credential file. Defaults to the platform data
    /// directory, or the config directory when none exists.
    pub credential_dir: Option<String>,
    /// Fixed storage key; also the credential file name
    pub credential_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            credential_dir: None,
            credential_key: DEFAULT_CREDENTIAL_KEY.to_string(),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let key = self.credential_key.trim();
        if key.is_empty() {
            return Err(ConfigError::session("session.credential_key cannot be empty"));
        }
        if !key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
            || key.starts_with('.')
        {
            return Err(ConfigError::session(format!(
                "session.credential_key may only contain letters, digits, '_', '-' and '.', got {key}"
            )));
        }
        Ok(())
    }

    /// Resolve the credential directory
    pub fn resolve_dir(&self, config_dir: &Path) -> PathBuf {
        match &self.credential_dir {
            Some(dir) => PathBuf::from(dir),
            None => dirs::data_dir()
                .map(|dir| dir.join(APP_DATA_DIR_NAME))
                .unwrap_or_else(|| config_dir.to_path_buf()),
        }
    }
}

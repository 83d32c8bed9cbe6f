use crate::{ConfigError, ConfigErrorResult, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};

use serde::Deserialize;

/// Where the portal REST API lives.
///
/// No request timeout is configured here; transport defaults apply.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL including the API prefix (e.g., "https://portal.example.com/api")
    pub base_url: String,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let url = self.base_url.trim();
        if url.is_empty() {
            return Err(ConfigError::api("api.base_url cannot be empty"));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::api(format!(
                "api.base_url must start with http:// or https://, got {url}"
            )));
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::api("api.user_agent cannot be empty"));
        }
        Ok(())
    }
}

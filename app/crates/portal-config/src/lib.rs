mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod session_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;

const CONFIG_DIR_ENV: &str = "PORTAL_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".portal";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";
const DEFAULT_USER_AGENT: &str = concat!("portal/", env!("CARGO_PKG_VERSION"));
const DEFAULT_CREDENTIAL_KEY: &str = "portal_token";
const APP_DATA_DIR_NAME: &str = "business-portal";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = true;

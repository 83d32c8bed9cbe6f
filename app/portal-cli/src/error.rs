use portal_api::ClientError;
use portal_config::ConfigError;
use portal_store::StoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Client setup failed: {source}")]
    Client {
        #[from]
        source: ClientError,
    },

    #[error("{source}")]
    Store {
        #[from]
        source: StoreError,
    },

    #[error("Not signed in. Run `portal login` first. {location}")]
    NotSignedIn { location: ErrorLocation },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to encode output: {source}")]
    Output {
        #[from]
        source: serde_json::Error,
    },
}

impl CliError {
    #[track_caller]
    pub fn not_signed_in() -> Self {
        CliError::NotSignedIn {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message printed to the terminal
    pub fn user_message(&self) -> String {
        match self {
            Self::Store { source } => source.message(),
            Self::NotSignedIn { .. } => "Not signed in. Run `portal login` first.".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;

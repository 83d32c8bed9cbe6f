use std::panic::Location;

use crate::CredentialError;

use error_location::ErrorLocation;
use serde_json::Value;
use thiserror::Error;

const NO_RESPONSE_MESSAGE: &str = "No response from server. Please check your network connection.";
const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";

/// Errors that can occur during API calls
#[derive(Error, Debug)]
pub enum ClientError {
    /// The server answered with a non-success status other than 401
    #[error("API error (status {status}): {} {location}", .message.as_deref().unwrap_or("no message"))]
    Api {
        status: u16,
        message: Option<String>,
        location: ErrorLocation,
    },

    /// The server rejected the bearer credential
    #[error("Unauthorized: {} {location}", .message.as_deref().unwrap_or("credential rejected"))]
    Unauthorized {
        message: Option<String>,
        location: ErrorLocation,
    },

    /// The request went out but no response came back
    #[error("No response from server: {message} {location}")]
    NoResponse {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    /// The request could not be built or sent at all
    #[error("Request error: {message} {location}")]
    Request {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    /// The held credential could not be read, so nothing was sent
    #[error("Credential unavailable: {source} {location}")]
    Credential {
        location: ErrorLocation,
        #[source]
        source: CredentialError,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());
        if err.is_builder() {
            ClientError::Request {
                message: err.to_string(),
                location,
                source: err,
            }
        } else {
            ClientError::NoResponse {
                message: err.to_string(),
                location,
                source: err,
            }
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Build the error for a non-success response.
    ///
    /// Accepts `{"message": ".."}`, `{"error": ".."}` and
    /// `{"error": {"message": ".."}}` bodies; anything else leaves the
    /// message empty.
    #[track_caller]
    pub fn from_status(status: u16, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<Value>(body)
            .ok()
            .as_ref()
            .and_then(extract_message);
        let location = ErrorLocation::from(Location::caller());

        if status == 401 {
            ClientError::Unauthorized { message, location }
        } else {
            ClientError::Api {
                status,
                message,
                location,
            }
        }
    }

    /// HTTP status, when a response was received
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Unauthorized { .. } => Some(401),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Whether re-issuing the same request could succeed without changes.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::NoResponse { .. } => true,
            Self::Credential { source, .. } => source.is_transient(),
            Self::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Message shown to the user for a failed operation.
    ///
    /// The server's own message wins; otherwise `fallback` ("Failed to fetch
    /// projects"). Connectivity and request-setup failures get their own wording
    /// because the user has to react differently.
    pub fn surface_message(&self, fallback: &str) -> String {
        match self {
            Self::Api {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Api { message: None, .. } | Self::Json { .. } => fallback.to_string(),
            Self::Unauthorized { message, .. } => message
                .clone()
                .unwrap_or_else(|| SESSION_EXPIRED_MESSAGE.to_string()),
            Self::NoResponse { .. } => NO_RESPONSE_MESSAGE.to_string(),
            Self::Request { message, .. } => format!("Error: {message}"),
            Self::Credential { source, .. } => source.recovery_hint().to_string(),
        }
    }
}

fn extract_message(body: &Value) -> Option<String> {
    let candidate = body
        .get("message")
        .or_else(|| body.get("error").and_then(|e| e.get("message")))
        .or_else(|| body.get("error"));

    candidate
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(String::from)
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<CredentialError> for ClientError {
    #[track_caller]
    fn from(source: CredentialError) -> Self {
        ClientError::Credential {
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

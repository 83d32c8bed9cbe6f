use portal_api::{ClientError, CredentialError};
use portal_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// How a store operation failed.
///
/// The slice the operation belongs to has already been settled by the time
/// the caller sees one of these; the error is informational.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Input failed validation; no request was sent and no state changed
    #[error("Invalid {field}: {message} {location}")]
    Invalid {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// The request failed; the owning slice holds `message` in its error
    #[error("{message} {location}")]
    Rejected {
        message: String,
        status: Option<u16>,
        transient: bool,
        location: ErrorLocation,
    },

    /// The credential could not be read, written or removed
    #[error("Credential storage failed: {source} {location}")]
    Credential {
        #[source]
        source: CredentialError,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn rejected(message: impl Into<String>, err: &ClientError) -> Self {
        StoreError::Rejected {
            message: message.into(),
            status: err.status(),
            transient: err.is_transient(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message for the user, without the source location
    pub fn message(&self) -> String {
        match self {
            Self::Invalid { message, .. } | Self::Rejected { message, .. } => message.clone(),
            Self::Credential { source, .. } => source.recovery_hint().to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => *status,
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Whether re-invoking the same operation unchanged could succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Rejected { transient, .. } => *transient,
            Self::Credential { source, .. } => source.is_transient(),
            Self::Invalid { .. } => false,
        }
    }
}

impl From<CoreError> for StoreError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        let field = match &err {
            CoreError::Validation { field, .. } => *field,
            CoreError::InvalidRole { .. } => "role",
            CoreError::InvalidProjectStatus { .. } | CoreError::InvalidMilestoneStatus { .. } => {
                "status"
            }
            CoreError::InvalidPriority { .. } => "priority",
        };
        StoreError::Invalid {
            field,
            message: err.field_message(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CredentialError> for StoreError {
    #[track_caller]
    fn from(source: CredentialError) -> Self {
        StoreError::Credential {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;

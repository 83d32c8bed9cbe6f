use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {field}: {message} {location}")]
    Validation {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid role: {value} {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid project status: {value} {location}")]
    InvalidProjectStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid milestone status: {value} {location}")]
    InvalidMilestoneStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid priority: {value} {location}")]
    InvalidPriority {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error for a single field
    #[track_caller]
    pub fn validation<S: Into<String>>(field: &'static str, message: S) -> Self {
        CoreError::Validation {
            field,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message suitable for inline form feedback (no location suffix)
    pub fn field_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::InvalidRole { value, .. } => format!("Unknown role '{value}'"),
            Self::InvalidProjectStatus { value, .. } => {
                format!("Unknown project status '{value}'")
            }
            Self::InvalidMilestoneStatus { value, .. } => {
                format!("Unknown milestone status '{value}'")
            }
            Self::InvalidPriority { value, .. } => format!("Unknown priority '{value}'"),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;

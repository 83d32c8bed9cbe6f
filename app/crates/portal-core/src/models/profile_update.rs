use crate::models::client_draft::validate_email;
use crate::{Result as CoreErrorResult, Skill};

use serde::Serialize;

/// Self-service profile edit for the signed-in user
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<Skill>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ProfileUpdate {
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        if let Some(password) = &self.password
            && password.len() < 6
        {
            return Err(crate::CoreError::validation(
                "password",
                "Password must be at least 6 characters",
            ));
        }
        Ok(())
    }
}

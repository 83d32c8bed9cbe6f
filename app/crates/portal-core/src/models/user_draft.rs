use crate::models::client_draft::validate_email;
use crate::{CoreError, Result as CoreErrorResult, Role, User};

use serde::Serialize;

/// Request body for admin-side user creation and update
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    /// Required on create; omitted on update to keep the current password
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    pub is_active: bool,
}

impl UserDraft {
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: None,
            role,
            title: None,
            department: None,
            is_active: true,
        }
    }

    /// Validate for creation (password required)
    #[track_caller]
    pub fn validate_new(&self) -> CoreErrorResult<()> {
        if self.password.as_deref().is_none_or(str::is_empty) {
            return Err(CoreError::validation("password", "Password is required"));
        }
        self.validate()
    }

    /// Validate for update (password optional)
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::validation("name", "Name is required"));
        }
        validate_email(&self.email)?;
        if let Some(password) = &self.password
            && !password.is_empty()
            && password.len() < 6
        {
            return Err(CoreError::validation(
                "password",
                "Password must be at least 6 characters",
            ));
        }
        Ok(())
    }
}

/// Update draft for an existing account; the password is left unchanged
impl From<&User> for UserDraft {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            password: None,
            role: user.role,
            title: user.title.clone(),
            department: user.department.clone(),
            is_active: user.is_active,
        }
    }
}

use crate::models::client_draft::validate_email;
use crate::{CoreError, Result as CoreErrorResult, Role, Session};

use serde::{Deserialize, Serialize};

/// Body returned by login, registration and the profile endpoint.
///
/// Older accounts carry `firstName`/`lastName` instead of `name`; the profile
/// endpoint omits `token`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthPayload {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub token: Option<String>,
}

impl AuthPayload {
    pub fn display_name(&self) -> String {
        if let Some(name) = self.name.as_deref().filter(|n| !n.trim().is_empty()) {
            return name.to_string();
        }

        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            self.email.clone()
        } else {
            parts.join(" ")
        }
    }

    /// Build a session, preferring the token in the payload over `held_token`
    #[track_caller]
    pub fn into_session(self, held_token: Option<&str>) -> CoreErrorResult<Session> {
        let name = self.display_name();
        let token = match (self.token, held_token) {
            (Some(token), _) if !token.is_empty() => token,
            (_, Some(held)) if !held.is_empty() => held.to_string(),
            _ => {
                return Err(CoreError::validation(
                    "token",
                    "Authentication response did not include a token",
                ));
            }
        };

        Ok(Session {
            id: self.id,
            name,
            email: self.email,
            role: self.role,
            token,
        })
    }
}

/// Login form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(CoreError::validation("email", "Please fill in all fields"));
        }
        Ok(())
    }
}

/// Self-registration form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Registration {
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::validation("name", "Name is required"));
        }
        validate_email(&self.email)?;
        if self.password.len() < 6 {
            return Err(CoreError::validation(
                "password",
                "Password must be at least 6 characters",
            ));
        }
        Ok(())
    }
}

use crate::{Address, Client, CoreError, Result as CoreErrorResult};

use serde::Serialize;

/// Request body for creating or updating a client record.
///
/// `password` never reaches the `/clients` endpoint; when present it is used to
/// create or update the client's login account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClientDraft {
    pub name: String,
    pub email: String,
    #[serde(skip)]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    pub notes: Vec<String>,
    pub pain_points: Vec<String>,
}

impl ClientDraft {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::validation("name", "Client name is required"));
        }
        validate_email(&self.email)?;
        if let Some(password) = &self.password
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

impl From<&Client> for ClientDraft {
    fn from(client: &Client) -> Self {
        Self {
            name: client.name.clone(),
            email: client.email.clone(),
            password: None,
            phone: client.phone.clone(),
            company_name: client.company_name.clone(),
            website: client.website.clone(),
            address: client.address.clone(),
            notes: client.notes.clone(),
            pain_points: client.pain_points.clone(),
        }
    }
}

/// Minimal shape check; the backend owns real address validation.
#[track_caller]
pub(crate) fn validate_email(email: &str) -> CoreErrorResult<()> {
    let trimmed = email.trim();
    match trimmed.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ if trimmed.is_empty() => Err(CoreError::validation("email", "Email is required")),
        _ => Err(CoreError::validation(
            "email",
            format!("'{trimmed}' is not a valid email address"),
        )),
    }
}

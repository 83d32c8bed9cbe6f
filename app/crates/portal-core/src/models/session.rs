use crate::{Capability, Role};

use serde::Serialize;

/// The signed-in identity.
///
/// Only ever built from a successful auth response, and only while the same
/// token is held in credential storage.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(skip)]
    pub token: String,
}

impl Session {
    pub fn can(&self, capability: Capability) -> bool {
        self.role.grants(capability)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("role", &self.role)
            .field("token", &"<redacted>")
            .finish()
    }
}

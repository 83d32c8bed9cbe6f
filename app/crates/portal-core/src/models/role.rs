use crate::{Capability, CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Portal account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    /// Full access to portal administration
    Admin,
    Developer,
    /// Developer who also leads a team
    TeamLead,
    /// External customer, sees only their own projects
    Client,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Developer, Role::TeamLead, Role::Client];

    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Developer => "developer",
            Self::TeamLead => "teamLead",
            Self::Client => "client",
        }
    }

    /// Whether this role grants `capability`.
    ///
    /// Every route and UI gate resolves permissions through here.
    pub fn grants(&self, capability: Capability) -> bool {
        match capability {
            Capability::AdministerPortal => matches!(self, Self::Admin),
            Capability::WorkOnProjects => matches!(self, Self::Developer | Self::TeamLead),
            Capability::ViewClientPortal => matches!(self, Self::Client),
            Capability::EditOwnProfile => true,
        }
    }

    /// All capabilities granted to this role
    pub fn capabilities(&self) -> Vec<Capability> {
        Capability::ALL
            .into_iter()
            .filter(|capability| self.grants(*capability))
            .collect()
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "admin" => Ok(Self::Admin),
            "developer" => Ok(Self::Developer),
            "teamLead" => Ok(Self::TeamLead),
            "client" => Ok(Self::Client),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

use portal_core::Entity;

use serde::Serialize;

/// Operation kinds every entity slice supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    FetchAll,
    FetchOne,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Whether fulfilment raises the slice's success flag
    pub fn marks_success(&self) -> bool {
        matches!(self, Self::Create | Self::Update | Self::Delete)
    }

    /// Message used when the server gives none ("Failed to fetch projects")
    pub fn fallback_message<E: Entity>(&self) -> String {
        match self {
            Self::FetchAll => format!("Failed to fetch {}", E::PLURAL),
            Self::FetchOne => format!("Failed to fetch {}", E::LABEL),
            Self::Create => format!("Failed to create {}", E::LABEL),
            Self::Update => format!("Failed to update {}", E::LABEL),
            Self::Delete => format!("Failed to delete {}", E::LABEL),
        }
    }
}

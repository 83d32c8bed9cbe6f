use crate::models::{dates, reference};
use crate::{Attachment, Entity, MilestoneStatus, Priority};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A dated deliverable within a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Owning project id
    #[serde(rename = "project", alias = "projectId", deserialize_with = "reference::id")]
    pub project_id: String,
    pub status: MilestoneStatus,
    #[serde(with = "dates::date")]
    pub start_date: NaiveDate,
    #[serde(with = "dates::date")]
    pub due_date: NaiveDate,
    #[serde(
        default,
        with = "dates::optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub completed_date: Option<NaiveDate>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, deserialize_with = "reference::ids")]
    pub assigned_to: Vec<String>,
    /// Milestones that must complete before this one
    #[serde(default, deserialize_with = "reference::ids")]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub progress_percentage: f64,
    #[serde(default)]
    pub notes: Vec<String>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Milestone {
    pub fn is_assigned_to(&self, user_id: &str) -> bool {
        self.assigned_to.iter().any(|id| id == user_id)
    }

    pub fn depends_on(&self, milestone_id: &str) -> bool {
        self.dependencies.iter().any(|id| id == milestone_id)
    }
}

impl Entity for Milestone {
    const LABEL: &'static str = "milestone";
    const PLURAL: &'static str = "milestones";

    fn id(&self) -> &str {
        &self.id
    }
}

//! Project entity - client engagement tracked by the portal.

use crate::models::{dates, reference};
use crate::{Attachment, Entity, Priority, ProjectStatus, Satisfaction};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A project delivered for one client by a set of developers.
///
/// The client, developers, project manager and milestones are held by id.
/// `client_name` is a denormalized display copy and may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(alias = "client", deserialize_with = "reference::id")]
    pub client_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    pub status: ProjectStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub figma_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jira_link: Option<String>,
    #[serde(with = "dates::date")]
    pub start_date: NaiveDate,
    #[serde(with = "dates::date")]
    pub deadline: NaiveDate,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default, deserialize_with = "reference::ids")]
    pub assigned_developers: Vec<String>,
    #[serde(
        default,
        deserialize_with = "reference::optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub project_manager: Option<String>,
    #[serde(default, deserialize_with = "reference::ids")]
    pub milestones: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spent_budget: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub satisfaction: Option<Satisfaction>,
    #[serde(default)]
    pub notes: Vec<String>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Whether `user_id` is one of the assigned developers or the manager
    pub fn involves(&self, user_id: &str) -> bool {
        self.project_manager.as_deref() == Some(user_id)
            || self.assigned_developers.iter().any(|id| id == user_id)
    }

    /// Deadline has passed and the project is still open
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.status.is_closed() && self.deadline < today
    }

    /// Budget left, if a budget was set
    pub fn remaining_budget(&self) -> Option<f64> {
        self.budget
            .map(|budget| budget - self.spent_budget.unwrap_or(0.0))
    }
}

impl Entity for Project {
    const LABEL: &'static str = "project";
    const PLURAL: &'static str = "projects";

    fn id(&self) -> &str {
        &self.id
    }
}

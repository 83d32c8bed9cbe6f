use crate::models::dates;
use crate::{
    Attachment, CoreError, Milestone, MilestoneStatus, Priority, Result as CoreErrorResult,
};

use chrono::NaiveDate;
use serde::Serialize;

/// Request body for creating or updating a milestone
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneDraft {
    pub title: String,
    pub description: String,
    #[serde(rename = "project")]
    pub project_id: String,
    pub status: MilestoneStatus,
    #[serde(with = "dates::date")]
    pub start_date: NaiveDate,
    #[serde(with = "dates::date")]
    pub due_date: NaiveDate,
    #[serde(with = "dates::optional_date", skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<NaiveDate>,
    pub priority: Priority,
    pub assigned_to: Vec<String>,
    pub dependencies: Vec<String>,
    pub progress_percentage: f64,
    pub notes: Vec<String>,
    pub attachments: Vec<Attachment>,
}

impl MilestoneDraft {
    pub fn new(
        title: impl Into<String>,
        project_id: impl Into<String>,
        start_date: NaiveDate,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            project_id: project_id.into(),
            status: MilestoneStatus::default(),
            start_date,
            due_date,
            completed_date: None,
            priority: Priority::default(),
            assigned_to: Vec::new(),
            dependencies: Vec::new(),
            progress_percentage: 0.0,
            notes: Vec::new(),
            attachments: Vec::new(),
        }
    }

    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.title.trim().is_empty() {
            return Err(CoreError::validation("title", "Milestone title is required"));
        }
        if self.project_id.trim().is_empty() {
            return Err(CoreError::validation("project", "A project must be selected"));
        }
        if self.due_date < self.start_date {
            return Err(CoreError::validation(
                "dueDate",
                "Due date cannot be before the start date",
            ));
        }
        if !(0.0..=100.0).contains(&self.progress_percentage) {
            return Err(CoreError::validation(
                "progressPercentage",
                "Progress must be between 0 and 100",
            ));
        }
        if self.status == MilestoneStatus::Completed && self.completed_date.is_none() {
            return Err(CoreError::validation(
                "completedDate",
                "Completed milestones need a completion date",
            ));
        }
        Ok(())
    }
}

impl From<&Milestone> for MilestoneDraft {
    fn from(milestone: &Milestone) -> Self {
        Self {
            title: milestone.title.clone(),
            description: milestone.description.clone(),
            project_id: milestone.project_id.clone(),
            status: milestone.status,
            start_date: milestone.start_date,
            due_date: milestone.due_date,
            completed_date: milestone.completed_date,
            priority: milestone.priority,
            assigned_to: milestone.assigned_to.clone(),
            dependencies: milestone.dependencies.clone(),
            progress_percentage: milestone.progress_percentage,
            notes: milestone.notes.clone(),
            attachments: milestone.attachments.clone(),
        }
    }
}

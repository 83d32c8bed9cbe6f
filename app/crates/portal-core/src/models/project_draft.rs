use crate::models::dates;
use crate::{
    CoreError, MilestoneStatus, Priority, Project, ProjectStatus, Result as CoreErrorResult,
};

use chrono::NaiveDate;
use serde::Serialize;

/// Request body for creating or updating a project.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub client_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    pub status: ProjectStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub figma_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jira_link: Option<String>,
    #[serde(with = "dates::date")]
    pub start_date: NaiveDate,
    #[serde(with = "dates::date")]
    pub deadline: NaiveDate,
    pub tech_stack: Vec<String>,
    pub assigned_developers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_manager: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub initial_milestones: Vec<InitialMilestone>,
    pub budget: f64,
    pub tags: Vec<String>,
}

/// Milestone created together with its project
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitialMilestone {
    pub title: String,
    pub description: String,
    pub status: MilestoneStatus,
    #[serde(with = "dates::date")]
    pub start_date: NaiveDate,
    #[serde(with = "dates::date")]
    pub due_date: NaiveDate,
    pub priority: Priority,
}

impl ProjectDraft {
    /// Draft with the required fields set and everything else empty
    pub fn new(
        title: impl Into<String>,
        client_id: impl Into<String>,
        status: ProjectStatus,
        start_date: NaiveDate,
        deadline: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            client_id: client_id.into(),
            client_name: None,
            status,
            priority: None,
            figma_link: None,
            repo_link: None,
            jira_link: None,
            start_date,
            deadline,
            tech_stack: Vec::new(),
            assigned_developers: Vec::new(),
            project_manager: None,
            initial_milestones: Vec::new(),
            budget: 0.0,
            tags: Vec::new(),
        }
    }

    /// Check the draft before it is sent. Failures never touch the store.
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.title.trim().is_empty() {
            return Err(CoreError::validation("title", "Project title is required"));
        }
        if self.client_id.trim().is_empty() {
            return Err(CoreError::validation("clientId", "A client must be selected"));
        }
        if self.deadline < self.start_date {
            return Err(CoreError::validation(
                "deadline",
                "Deadline cannot be before the start date",
            ));
        }
        if !self.budget.is_finite() || self.budget < 0.0 {
            return Err(CoreError::validation(
                "budget",
                "Budget must be a non-negative number",
            ));
        }
        for milestone in &self.initial_milestones {
            if milestone.title.trim().is_empty() {
                return Err(CoreError::validation(
                    "initialMilestones",
                    "Every milestone needs a title",
                ));
            }
            if milestone.due_date < milestone.start_date {
                return Err(CoreError::validation(
                    "initialMilestones",
                    format!("Milestone '{}' is due before it starts", milestone.title),
                ));
            }
        }
        Ok(())
    }
}

/// Edit form pre-filled from an existing project
impl From<&Project> for ProjectDraft {
    fn from(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            client_id: project.client_id.clone(),
            client_name: project.client_name.clone(),
            status: project.status,
            priority: project.priority,
            figma_link: project.figma_link.clone(),
            repo_link: project.repo_link.clone(),
            jira_link: project.jira_link.clone(),
            start_date: project.start_date,
            deadline: project.deadline,
            tech_stack: project.tech_stack.clone(),
            assigned_developers: project.assigned_developers.clone(),
            project_manager: project.project_manager.clone(),
            initial_milestones: Vec::new(),
            budget: project.budget.unwrap_or(0.0),
            tags: project.tags.clone(),
        }
    }
}

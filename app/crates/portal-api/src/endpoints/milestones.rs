use crate::{ApiClient, ClientResult};

use portal_core::{Milestone, MilestoneDraft};
use reqwest::Method;

impl ApiClient {
    /// List milestones of one project
    pub async fn list_project_milestones(&self, project_id: &str) -> ClientResult<Vec<Milestone>> {
        let req = self.request(Method::GET, &format!("/milestones/project/{}", project_id))?;
        self.execute(req).await
    }

    /// List milestones assigned to the signed-in user
    pub async fn list_assigned_milestones(&self) -> ClientResult<Vec<Milestone>> {
        let req = self.request(Method::GET, "/milestones/user")?;
        self.execute(req).await
    }

    /// Get a milestone by ID
    pub async fn get_milestone(&self, id: &str) -> ClientResult<Milestone> {
        let req = self.request(Method::GET, &format!("/milestones/{}", id))?;
        self.execute(req).await
    }

    /// Create a new milestone
    pub async fn create_milestone(&self, draft: &MilestoneDraft) -> ClientResult<Milestone> {
        let req = self.request(Method::POST, "/milestones")?.json(draft);
        self.execute(req).await
    }

    /// Update a milestone
    pub async fn update_milestone(
        &self,
        id: &str,
        draft: &MilestoneDraft,
    ) -> ClientResult<Milestone> {
        let req = self
            .request(Method::PUT, &format!("/milestones/{}", id))?
            .json(draft);
        self.execute(req).await
    }

    /// Delete a milestone
    pub async fn delete_milestone(&self, id: &str) -> ClientResult<()> {
        let req = self.request(Method::DELETE, &format!("/milestones/{}", id))?;
        self.execute_empty(req).await
    }
}

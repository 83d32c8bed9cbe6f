use crate::{ApiClient, ClientResult};

use portal_core::{Project, ProjectDraft};
use reqwest::Method;

impl ApiClient {
    /// List all projects visible to the caller
    pub async fn list_projects(&self) -> ClientResult<Vec<Project>> {
        let req = self.request(Method::GET, "/projects")?;
        self.execute(req).await
    }

    /// Get a project by ID
    pub async fn get_project(&self, id: &str) -> ClientResult<Project> {
        let req = self.request(Method::GET, &format!("/projects/{}", id))?;
        self.execute(req).await
    }

    /// Create a new project
    pub async fn create_project(&self, draft: &ProjectDraft) -> ClientResult<Project> {
        let req = self.request(Method::POST, "/projects")?.json(draft);
        self.execute(req).await
    }

    /// Update a project
    pub async fn update_project(&self, id: &str, draft: &ProjectDraft) -> ClientResult<Project> {
        let req = self
            .request(Method::PUT, &format!("/projects/{}", id))?
            .json(draft);
        self.execute(req).await
    }

    /// Delete a project
    pub async fn delete_project(&self, id: &str) -> ClientResult<()> {
        let req = self.request(Method::DELETE, &format!("/projects/{}", id))?;
        self.execute_empty(req).await
    }
}

use crate::{ApiClient, ClientResult};

use portal_core::{Client, ClientDraft};
use reqwest::Method;

impl ApiClient {
    /// List all clients
    pub async fn list_clients(&self) -> ClientResult<Vec<Client>> {
        let req = self.request(Method::GET, "/clients")?;
        self.execute(req).await
    }

    /// Get a client by ID
    pub async fn get_client(&self, id: &str) -> ClientResult<Client> {
        let req = self.request(Method::GET, &format!("/clients/{}", id))?;
        self.execute(req).await
    }

    /// Create a client record (the login account is created separately)
    pub async fn create_client(&self, draft: &ClientDraft) -> ClientResult<Client> {
        let req = self.request(Method::POST, "/clients")?.json(draft);
        self.execute(req).await
    }

    /// Update a client record
    pub async fn update_client(&self, id: &str, draft: &ClientDraft) -> ClientResult<Client> {
        let req = self
            .request(Method::PUT, &format!("/clients/{}", id))?
            .json(draft);
        self.execute(req).await
    }

    /// Delete a client record
    pub async fn delete_client(&self, id: &str) -> ClientResult<()> {
        let req = self.request(Method::DELETE, &format!("/clients/{}", id))?;
        self.execute_empty(req).await
    }
}

use crate::{ApiClient, ClientResult};

use portal_core::{Role, User, UserDraft};
use reqwest::Method;

impl ApiClient {
    /// List all users (admin)
    pub async fn list_users(&self) -> ClientResult<Vec<User>> {
        let req = self.request(Method::GET, "/auth/users")?;
        self.execute(req).await
    }

    /// List users holding `role`
    pub async fn list_users_by_role(&self, role: Role) -> ClientResult<Vec<User>> {
        let req = self.request(Method::GET, &format!("/auth/users/role/{}", role.as_str()))?;
        self.execute(req).await
    }

    /// Get a user by ID
    pub async fn get_user(&self, id: &str) -> ClientResult<User> {
        let req = self.request(Method::GET, &format!("/auth/users/{}", id))?;
        self.execute(req).await
    }

    /// Create a user account
    pub async fn create_user(&self, draft: &UserDraft) -> ClientResult<User> {
        let req = self.request(Method::POST, "/auth/users")?.json(draft);
        self.execute(req).await
    }

    /// Update a user account
    pub async fn update_user(&self, id: &str, draft: &UserDraft) -> ClientResult<User> {
        let req = self
            .request(Method::PUT, &format!("/auth/users/{}", id))?
            .json(draft);
        self.execute(req).await
    }

    /// Delete a user account
    pub async fn delete_user(&self, id: &str) -> ClientResult<()> {
        let req = self.request(Method::DELETE, &format!("/auth/users/{}", id))?;
        self.execute_empty(req).await
    }
}

use crate::{ApiClient, ClientResult};

use portal_core::{AuthPayload, Credentials, ProfileUpdate, Registration};
use reqwest::Method;

impl ApiClient {
    /// Exchange credentials for an auth payload (with token)
    pub async fn login(&self, credentials: &Credentials) -> ClientResult<AuthPayload> {
        let req = self
            .anonymous_request(Method::POST, "/auth/login")
            .json(credentials);
        self.execute(req).await
    }

    /// Create an account and receive an auth payload (with token)
    pub async fn register(&self, registration: &Registration) -> ClientResult<AuthPayload> {
        let req = self
            .anonymous_request(Method::POST, "/auth/register")
            .json(registration);
        self.execute(req).await
    }

    /// Who the held credential belongs to
    pub async fn profile(&self) -> ClientResult<AuthPayload> {
        let req = self.request(Method::GET, "/auth/profile")?;
        self.execute(req).await
    }

    /// Update the signed-in user's own profile
    pub async fn update_profile(&self, update: &ProfileUpdate) -> ClientResult<AuthPayload> {
        let req = self.request(Method::PUT, "/auth/profile")?.json(update);
        self.execute(req).await
    }
}

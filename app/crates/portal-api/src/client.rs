use crate::{ClientError, ClientResult, CredentialStore};

use std::sync::Arc;

use log::{debug, warn};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder};
use serde::de::DeserializeOwned;

/// HTTP client for the portal REST API.
///
/// The bearer token is read from the credential store on every request so a
/// cleared credential is never sent again.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    credentials: Arc<dyn CredentialStore>,
    client: ReqwestClient,
}

impl ApiClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API root including its prefix (e.g., "http://localhost:5000/api")
    /// * `credentials` - Where the bearer token is persisted
    pub fn new(base_url: &str, credentials: Arc<dyn CredentialStore>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
            client: ReqwestClient::new(),
        }
    }

    /// Create a client from the `[api]` config section
    pub fn from_config(
        config: &portal_config::ApiConfig,
        credentials: Arc<dyn CredentialStore>,
    ) -> ClientResult<Self> {
        let client = ReqwestClient::builder()
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            credentials,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &Arc<dyn CredentialStore> {
        &self.credentials
    }

    /// Build a request, attaching the persisted bearer token when present.
    ///
    /// A credential that cannot be read fails the request before anything is
    /// sent.
    pub(crate) fn request(&self, method: Method, path: &str) -> ClientResult<RequestBuilder> {
        let url = format!("{}{}", self.base_url, path);
        debug!("{method} {url}");
        let req = self.client.request(method, &url);

        match self.credentials.load() {
            Ok(Some(token)) => Ok(req.bearer_auth(token)),
            Ok(None) => Ok(req),
            Err(e) => {
                warn!("Not sending {url}: {e}");
                Err(ClientError::from(e))
            }
        }
    }

    /// Build a request that never carries the bearer token (sign-in endpoints)
    pub(crate) fn anonymous_request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{method} {url}");
        self.client.request(method, &url)
    }

    /// Execute request and decode a JSON body
    pub(crate) async fn execute<T: DeserializeOwned>(&self, req: RequestBuilder) -> ClientResult<T> {
        let body = self.send(req).await?;
        serde_json::from_slice(&body).map_err(ClientError::from_json)
    }

    /// Execute request, ignoring any success body
    pub(crate) async fn execute_empty(&self, req: RequestBuilder) -> ClientResult<()> {
        self.send(req).await.map(|_| ())
    }

    async fn send(&self, req: RequestBuilder) -> ClientResult<Vec<u8>> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            debug!("Request failed with status {status}");
            return Err(ClientError::from_status(status.as_u16(), &body));
        }

        Ok(body.to_vec())
    }
}

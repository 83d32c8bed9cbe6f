use crate::{ApiClient, CredentialStore, MemoryCredentialStore};

use std::sync::Arc;

fn store() -> Arc<dyn CredentialStore> {
    Arc::new(MemoryCredentialStore::new())
}

#[test]
fn given_trailing_slash_when_created_then_base_url_is_trimmed() {
    let client = ApiClient::new("http://localhost:5000/api/", store());
    assert_eq!(client.base_url(), "http://localhost:5000/api");
}

#[test]
fn given_no_trailing_slash_when_created_then_base_url_is_unchanged() {
    let client = ApiClient::new("http://localhost:5000/api", store());
    assert_eq!(client.base_url(), "http://localhost:5000/api");
}

#[test]
fn given_api_config_when_built_from_config_then_base_url_is_taken_from_it() {
    let config = portal_config::ApiConfig {
        base_url: "https://portal.example.com/api/".to_string(),
        ..portal_config::ApiConfig::default()
    };

    let client = ApiClient::from_config(&config, store()).unwrap();

    assert_eq!(client.base_url(), "https://portal.example.com/api");
}

#[test]
fn given_store_with_token_when_cloned_then_clone_shares_store() {
    let credentials: Arc<dyn CredentialStore> = Arc::new(MemoryCredentialStore::with_token("abc"));
    let client = ApiClient::new("http://localhost:5000/api", credentials);
    let clone = client.clone();

    client.credentials().clear().unwrap();

    assert_eq!(clone.credentials().load().unwrap(), None);
}

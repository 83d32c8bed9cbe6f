//! portal-api
//!
//! Thin typed wrappers over the portal REST API plus persisted credential
//! storage for the bearer token.

pub(crate) mod client;
pub(crate) mod credential;
pub(crate) mod endpoints;
pub(crate) mod error;

#[cfg(test)]
mod tests;

pub use client::ApiClient;
pub use credential::{
    CredentialError, CredentialResult, CredentialStore, FileCredentialStore,
    MemoryCredentialStore,
};
pub use error::{ClientError, Result as ClientResult};

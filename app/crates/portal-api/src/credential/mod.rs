//! Persisted bearer credential.
//!
//! A single token string under a fixed key. The store is the source of truth:
//! the in-memory session is only valid while the store holds the same token.

mod error;
mod file_store;
mod memory_store;

pub use error::{CredentialError, Result as CredentialResult};
pub use file_store::FileCredentialStore;
pub use memory_store::MemoryCredentialStore;

/// Storage for the bearer token
pub trait CredentialStore: Send + Sync {
    /// Returns `Ok(None)` when no credential has been stored
    fn load(&self) -> CredentialResult<Option<String>>;

    fn save(&self, token: &str) -> CredentialResult<()>;

    /// Removing an absent credential is not an error
    fn clear(&self) -> CredentialResult<()>;
}

//! Session rehydration at process start.

use crate::{AuthAction, Action, Store, StoreResult};

use portal_core::Session;

use log::{debug, info, warn};
use serde::Serialize;

/// Where the one-time rehydration attempt stands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BootstrapPhase {
    #[default]
    Idle,
    /// A persisted credential is being checked; protected views must wait
    Rehydrating,
    Settled,
}

/// Result of [`Store::bootstrap`]
#[derive(Debug, Clone, PartialEq)]
pub enum BootstrapOutcome {
    /// Nothing persisted, nothing to do
    NoCredential,
    /// A session was already in memory
    AlreadySignedIn,
    Restored(Session),
    /// The server rejected the credential and it was discarded
    CredentialRejected,
    /// Rehydration failed for another reason; the credential is kept so a
    /// later retry can succeed
    Deferred { message: String },
}

impl Store {
    /// Rehydrate the session from the persisted credential.
    ///
    /// Runs at most one "who am I" request. Only a 401 discards the
    /// credential.
    pub async fn bootstrap(&self) -> StoreResult<BootstrapOutcome> {
        if self.select(|state| state.auth.is_signed_in()) {
            self.dispatch(Action::Auth(AuthAction::BootstrapSettled));
            return Ok(BootstrapOutcome::AlreadySignedIn);
        }

        let held = match self.api().credentials().load() {
            Ok(held) => held,
            Err(e) => {
                self.dispatch(Action::Auth(AuthAction::BootstrapSettled));
                return Err(e.into());
            }
        };

        if held.is_none() {
            debug!("No persisted credential, starting signed out");
            self.dispatch(Action::Auth(AuthAction::BootstrapSettled));
            return Ok(BootstrapOutcome::NoCredential);
        }

        self.dispatch(Action::Auth(AuthAction::BootstrapStarted));
        let outcome = match self.fetch_profile().await {
            Ok(session) => {
                info!("Restored session for {}", session.email);
                BootstrapOutcome::Restored(session)
            }
            Err(e) if e.is_unauthorized() => {
                warn!("Persisted credential rejected, discarded");
                BootstrapOutcome::CredentialRejected
            }
            Err(e) => {
                warn!("Session rehydration failed, credential kept: {}", e.message());
                BootstrapOutcome::Deferred { message: e.message() }
            }
        };
        self.dispatch(Action::Auth(AuthAction::BootstrapSettled));

        Ok(outcome)
    }
}

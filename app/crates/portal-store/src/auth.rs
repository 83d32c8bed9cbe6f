use crate::{BootstrapPhase, Lifecycle};

use portal_core::Session;

use log::info;
use serde::Serialize;

/// Signed-in identity plus the lifecycle of the last auth operation
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSlice {
    pub session: Option<Session>,
    pub lifecycle: Lifecycle,
    pub bootstrap: BootstrapPhase,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthAction {
    Pending,
    /// Login, registration or rehydration succeeded
    SignedIn(Session),
    ProfileUpdated(Session),
    Rejected(String),
    /// Logout, or the credential was rejected by the server
    SignedOut,
    ResetStatus,
    BootstrapStarted,
    BootstrapSettled,
}

impl AuthSlice {
    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn reduce(&mut self, action: AuthAction) {
        match action {
            AuthAction::Pending => self.lifecycle.begin(),
            AuthAction::SignedIn(session) => {
                info!("Signed in as {} ({})", session.email, session.role);
                self.session = Some(session);
                self.lifecycle.fulfil(true);
            }
            AuthAction::ProfileUpdated(session) => {
                self.session = Some(session);
                self.lifecycle.fulfil(true);
            }
            AuthAction::Rejected(message) => self.lifecycle.reject(message),
            AuthAction::SignedOut => {
                if let Some(session) = self.session.take() {
                    info!("Signed out {}", session.email);
                }
                self.lifecycle.reset();
            }
            AuthAction::ResetStatus => self.lifecycle.reset(),
            AuthAction::BootstrapStarted => {
                self.bootstrap = BootstrapPhase::Rehydrating;
            }
            AuthAction::BootstrapSettled => self.bootstrap = BootstrapPhase::Settled,
        }
    }
}

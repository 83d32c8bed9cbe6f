use crate::{Action, AuthAction, Store, StoreError, StoreResult};

use portal_api::ClientError;
use portal_core::{AuthPayload, Credentials, ProfileUpdate, Registration, Session};

use log::{debug, warn};

const LOGIN_FAILED: &str = "Login failed";
const REGISTRATION_FAILED: &str = "Registration failed";
const PROFILE_FAILED: &str = "Failed to load profile";
const PROFILE_UPDATE_FAILED: &str = "Failed to update profile";

impl Store {
    /// Sign in and persist the returned credential
    pub async fn login(&self, credentials: &Credentials) -> StoreResult<Session> {
        credentials.validate()?;
        self.dispatch(Action::Auth(AuthAction::Pending));

        let payload = self
            .api
            .login(credentials)
            .await
            .map_err(|err| self.reject_auth(LOGIN_FAILED, err))?;
        self.sign_in(payload, None)
    }

    /// Create an account, then sign in as it
    pub async fn register(&self, registration: &Registration) -> StoreResult<Session> {
        registration.validate()?;
        self.dispatch(Action::Auth(AuthAction::Pending));

        let payload = self
            .api
            .register(registration)
            .await
            .map_err(|err| self.reject_auth(REGISTRATION_FAILED, err))?;
        self.sign_in(payload, None)
    }

    /// Ask the server who the persisted credential belongs to.
    ///
    /// A 401 discards the credential and drops any session.
    pub async fn fetch_profile(&self) -> StoreResult<Session> {
        let held = self.api.credentials().load()?;
        self.dispatch(Action::Auth(AuthAction::Pending));

        let payload = self
            .api
            .profile()
            .await
            .map_err(|err| self.reject_auth(PROFILE_FAILED, err))?;
        self.sign_in(payload, held.as_deref())
    }

    /// Update the signed-in user's own profile
    pub async fn update_profile(&self, update: &ProfileUpdate) -> StoreResult<Session> {
        update.validate()?;
        let held = self.select(|state| {
            state
                .auth
                .session
                .as_ref()
                .map(|session| session.token.clone())
        });
        self.dispatch(Action::Auth(AuthAction::Pending));

        let payload = self
            .api
            .update_profile(update)
            .await
            .map_err(|err| self.reject_auth(PROFILE_UPDATE_FAILED, err))?;

        let token_changed = payload
            .token
            .as_deref()
            .is_some_and(|token| held.as_deref() != Some(token));
        let session = payload
            .into_session(held.as_deref())
            .map_err(|e| self.fail_auth(e.into()))?;

        if token_changed {
            self.api
                .credentials()
                .save(&session.token)
                .map_err(|e| self.fail_auth(e.into()))?;
        }

        self.dispatch(Action::Auth(AuthAction::ProfileUpdated(session.clone())));
        Ok(session)
    }

    /// Discard the credential and everything fetched under it.
    ///
    /// The session is dropped even when the credential cannot be removed.
    pub fn logout(&self) -> StoreResult<()> {
        let cleared = self.api.credentials().clear();
        self.dispatch(Action::SessionEnded);

        if let Err(e) = cleared {
            warn!("Signed out but the credential could not be removed: {e}");
            return Err(e.into());
        }
        Ok(())
    }

    pub fn reset_auth_status(&self) {
        self.dispatch(Action::Auth(AuthAction::ResetStatus));
    }

    /// Persist the credential, then publish the session.
    fn sign_in(&self, payload: AuthPayload, held: Option<&str>) -> StoreResult<Session> {
        let session = payload
            .into_session(held)
            .map_err(|e| self.fail_auth(e.into()))?;

        if held != Some(session.token.as_str()) {
            self.api
                .credentials()
                .save(&session.token)
                .map_err(|e| self.fail_auth(e.into()))?;
        }

        self.dispatch(Action::Auth(AuthAction::SignedIn(session.clone())));
        Ok(session)
    }

    #[track_caller]
    fn reject_auth(&self, fallback: &str, err: ClientError) -> StoreError {
        let message = err.surface_message(fallback);
        debug!("Auth request rejected: {err}");

        if err.is_unauthorized() {
            self.end_session();
        }

        self.dispatch(Action::Auth(AuthAction::Rejected(message.clone())));
        StoreError::rejected(message, &err)
    }

    fn fail_auth(&self, err: StoreError) -> StoreError {
        self.dispatch(Action::Auth(AuthAction::Rejected(err.message())));
        err
    }
}

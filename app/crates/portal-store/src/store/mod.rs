//! The state container and the async operations that drive it.

mod auth;
mod clients;
mod milestones;
mod projects;
mod users;

use crate::{Action, AppState, MilestoneAction, Operation, SliceAction, StoreError, StoreResult};

use portal_api::{ApiClient, ClientError, ClientResult};
use portal_core::{Client, Entity, Milestone, Project, User};

use std::future::Future;
use std::sync::Arc;

use log::{debug, error, warn};
use tokio::sync::watch;

/// Process-wide state container.
///
/// Owns the state tree behind a watch channel so renderers can subscribe to
/// changes. State is only ever changed by [`Store::dispatch`], which runs the
/// pure reducers. Cloning is cheap and every clone shares the same state.
#[derive(Clone)]
pub struct Store {
    state: Arc<watch::Sender<AppState>>,
    api: ApiClient,
}

/// Entities whose slice actions can be addressed to the state tree
pub(crate) trait Routed: Entity {
    fn route(action: SliceAction<Self>) -> Action;
}

impl Routed for Project {
    fn route(action: SliceAction<Self>) -> Action {
        Action::Projects(action)
    }
}

impl Routed for Client {
    fn route(action: SliceAction<Self>) -> Action {
        Action::Clients(action)
    }
}

impl Routed for Milestone {
    fn route(action: SliceAction<Self>) -> Action {
        Action::Milestones(MilestoneAction::Entity(action))
    }
}

impl Routed for User {
    fn route(action: SliceAction<Self>) -> Action {
        Action::Users(action)
    }
}

impl Store {
    pub fn new(api: ApiClient) -> Self {
        let (state, _) = watch::channel(AppState::default());
        Self {
            state: Arc::new(state),
            api,
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Snapshot of the current state
    pub fn state(&self) -> AppState {
        self.state.borrow().clone()
    }

    /// Read part of the state without cloning all of it
    pub fn select<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.state.borrow())
    }

    /// Receiver notified after every dispatched action
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.state.subscribe()
    }

    /// Apply one action to the state tree
    pub fn dispatch(&self, action: Action) {
        self.state.send_modify(|state| state.reduce(action));
    }

    pub(crate) fn apply<E: Routed>(&self, action: SliceAction<E>) {
        self.dispatch(E::route(action));
    }

    /// Mark `operation` pending on `E`'s slice, await `request`, and settle the
    /// slice as rejected if it fails. Fulfilment is applied by the caller.
    pub(crate) async fn run<E, T>(
        &self,
        operation: Operation,
        request: impl Future<Output = ClientResult<T>>,
    ) -> StoreResult<T>
    where
        E: Routed,
    {
        self.apply::<E>(SliceAction::Pending(operation));
        request.await.map_err(|err| self.reject::<E>(operation, err))
    }

    #[track_caller]
    pub(crate) fn reject<E: Routed>(&self, operation: Operation, err: ClientError) -> StoreError {
        let message = err.surface_message(&operation.fallback_message::<E>());
        debug!("{operation:?} {} rejected: {err}", E::PLURAL);

        if err.is_unauthorized() {
            self.end_session();
        }

        self.apply::<E>(SliceAction::Rejected {
            operation,
            message: message.clone(),
        });
        StoreError::rejected(message, &err)
    }

    /// The server rejected the credential: it can never succeed again, so
    /// discard it and drop the session.
    pub(crate) fn end_session(&self) {
        warn!("Credential rejected by server, signing out");
        if let Err(e) = self.api.credentials().clear() {
            error!("Failed to discard rejected credential: {e}");
        }
        self.dispatch(Action::SessionEnded);
    }
}

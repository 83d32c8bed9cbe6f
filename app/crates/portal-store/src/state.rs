use crate::{AuthAction, AuthSlice, EntitySlice, MilestoneAction, MilestoneSlice, SliceAction};

use portal_core::{Client, Project, User};

use serde::Serialize;

/// The whole client-side state tree
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AppState {
    pub auth: AuthSlice,
    pub projects: EntitySlice<Project>,
    pub clients: EntitySlice<Client>,
    pub milestones: MilestoneSlice,
    pub users: EntitySlice<User>,
}

/// Every state transition, addressed to the slice that owns it
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Auth(AuthAction),
    Projects(SliceAction<Project>),
    Clients(SliceAction<Client>),
    Milestones(MilestoneAction),
    Users(SliceAction<User>),
    /// Drop the session and everything fetched under it
    SessionEnded,
}

impl AppState {
    pub fn reduce(&mut self, action: Action) {
        match action {
            Action::Auth(action) => self.auth.reduce(action),
            Action::Projects(action) => self.projects.reduce(action),
            Action::Clients(action) => self.clients.reduce(action),
            Action::Milestones(action) => self.milestones.reduce(action),
            Action::Users(action) => self.users.reduce(action),
            Action::SessionEnded => {
                self.auth.reduce(AuthAction::SignedOut);
                self.projects.reduce(SliceAction::Clear);
                self.clients.reduce(SliceAction::Clear);
                self.milestones
                    .reduce(MilestoneAction::Entity(SliceAction::Clear));
                self.users.reduce(SliceAction::Clear);
            }
        }
    }
}

//! portal-store
//!
//! Client-side state for the business portal: one state tree composed of
//! per-entity slices, mutated only through pure reducers, and an async
//! [`Store`] whose operations drive each slice through
//! `idle -> pending -> fulfilled | rejected`.
//!
//! Navigation is gated by [`RouteGuard`], which resolves every path against
//! the current session and role.

pub(crate) mod auth;
pub(crate) mod bootstrap;
pub(crate) mod error;
pub(crate) mod guard;
pub(crate) mod lifecycle;
pub(crate) mod milestones;
pub(crate) mod operation;
pub(crate) mod route;
pub(crate) mod slice;
pub(crate) mod state;
pub(crate) mod store;

#[cfg(test)]
mod tests;

pub use auth::{AuthAction, AuthSlice};
pub use bootstrap::{BootstrapOutcome, BootstrapPhase};
pub use error::{Result as StoreResult, StoreError};
pub use guard::{GuardDecision, Navigator, RouteGuard};
pub use lifecycle::Lifecycle;
pub use milestones::{MilestoneAction, MilestoneSlice};
pub use operation::Operation;
pub use route::{Access, NavItem, View, nav_menu, role_home};
pub use slice::{EntitySlice, SliceAction};
pub use state::{Action, AppState};
pub use store::Store;

//! Route guarding and navigation.

use crate::{Access, AppState, BootstrapPhase, Store, View, role_home};

use portal_core::Role;

use log::debug;
use tokio::sync::watch;

/// Upper bound on redirect chains; every redirect target renders for the
/// session that caused it, so one hop is normal.
const MAX_REDIRECTS: usize = 4;

/// What to do with a navigation target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(String),
    /// Session rehydration is in flight; hold the view until it settles
    Defer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct GuardKey {
    signed_in: bool,
    role: Option<Role>,
    rehydrating: bool,
    path: String,
}

/// Re-evaluates the guard only when the session presence, role or path
/// changes.
#[derive(Debug, Default)]
pub struct RouteGuard {
    last: Option<GuardKey>,
}

impl RouteGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide where `path` leads for a session with `role` (`None` when
    /// signed out).
    pub fn decide(role: Option<Role>, rehydrating: bool, path: &str) -> GuardDecision {
        let Some(view) = View::resolve(path) else {
            let fallback = role.map(role_home).unwrap_or(View::Home);
            return GuardDecision::Redirect(fallback.path());
        };

        match (view.access(), role) {
            (Access::PublicOnly, None) => GuardDecision::Render,
            (Access::PublicOnly, Some(role)) => GuardDecision::Redirect(role_home(role).path()),
            (Access::Requires(_), None) if rehydrating => GuardDecision::Defer,
            (Access::Requires(_), None) => GuardDecision::Redirect(View::Login.path()),
            (Access::Requires(capability), Some(role)) if role.grants(capability) => {
                GuardDecision::Render
            }
            (Access::Requires(_), Some(role)) => GuardDecision::Redirect(role_home(role).path()),
        }
    }

    /// Evaluate `path` against `state`, returning `None` when nothing the
    /// guard depends on has changed since the last evaluation.
    pub fn evaluate(&mut self, state: &AppState, path: &str) -> Option<GuardDecision> {
        let role = state.auth.session.as_ref().map(|session| session.role);
        let key = GuardKey {
            signed_in: role.is_some(),
            role,
            rehydrating: state.auth.bootstrap == BootstrapPhase::Rehydrating,
            path: path.to_string(),
        };

        if self.last.as_ref() == Some(&key) {
            return None;
        }

        let decision = Self::decide(key.role, key.rehydrating, &key.path);
        self.last = Some(key);
        Some(decision)
    }
}

/// Current location, kept valid against the store's session.
pub struct Navigator {
    guard: RouteGuard,
    state: watch::Receiver<AppState>,
    current: String,
    deferred: bool,
}

impl Navigator {
    /// Start at `path`, applying the guard immediately
    pub fn new(store: &Store, path: &str) -> Self {
        let mut navigator = Self {
            guard: RouteGuard::new(),
            state: store.subscribe(),
            current: path.to_string(),
            deferred: false,
        };
        navigator.navigate(path);
        navigator
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    /// Whether the current view is waiting on session rehydration
    pub fn is_deferred(&self) -> bool {
        self.deferred
    }

    /// Go to `path` and return the path actually shown
    pub fn navigate(&mut self, path: &str) -> &str {
        let state = self.state.borrow_and_update().clone();
        self.settle(&state, path.to_string());
        &self.current
    }

    /// Wait for the next state change and re-apply the guard to the current
    /// path. Returns the new path when the guard moved it, `None` when the
    /// store is gone.
    pub async fn changed(&mut self) -> Option<String> {
        loop {
            self.state.changed().await.ok()?;
            let state = self.state.borrow_and_update().clone();
            let before = self.current.clone();
            let was_deferred = self.deferred;
            self.settle(&state, before.clone());

            if self.current != before || self.deferred != was_deferred {
                return Some(self.current.clone());
            }
        }
    }

    fn settle(&mut self, state: &AppState, mut path: String) {
        for _ in 0..MAX_REDIRECTS {
            match self.guard.evaluate(state, &path) {
                None => break,
                Some(GuardDecision::Render) => {
                    self.deferred = false;
                    break;
                }
                Some(GuardDecision::Defer) => {
                    self.deferred = true;
                    break;
                }
                Some(GuardDecision::Redirect(target)) => {
                    debug!("Guard redirected {path} -> {target}");
                    path = target;
                }
            }
        }
        self.current = path;
    }
}

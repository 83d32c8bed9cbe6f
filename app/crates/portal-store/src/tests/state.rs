use super::{client, project, session};
use crate::{Action, AppState, AuthAction, SliceAction};

use portal_core::Role;

#[test]
fn given_actions_then_only_owning_slice_changes() {
    let mut state = AppState::default();

    state.reduce(Action::Projects(SliceAction::FetchedAll(vec![project("p1", "Site")])));

    assert_eq!(state.projects.len(), 1);
    assert!(state.clients.is_empty());
    assert!(state.auth.lifecycle.is_idle());
}

#[test]
fn given_signed_in_then_session_held_and_success() {
    let mut state = AppState::default();
    state.reduce(Action::Auth(AuthAction::Pending));

    state.reduce(Action::Auth(AuthAction::SignedIn(session(Role::Admin))));

    assert!(state.auth.is_signed_in());
    assert!(state.auth.lifecycle.success);
    assert!(!state.auth.lifecycle.is_loading);
}

#[test]
fn given_session_ended_then_session_and_data_dropped() {
    let mut state = AppState::default();
    state.reduce(Action::Auth(AuthAction::SignedIn(session(Role::Admin))));
    state.reduce(Action::Projects(SliceAction::FetchedAll(vec![project("p1", "Site")])));
    state.reduce(Action::Clients(SliceAction::FetchedOne(client("c1", "Acme"))));

    state.reduce(Action::SessionEnded);

    assert!(state.auth.session.is_none());
    assert!(state.projects.is_empty());
    assert!(state.clients.selected.is_none());
}

#[test]
fn given_auth_error_when_reset_then_idle() {
    let mut state = AppState::default();
    state.reduce(Action::Auth(AuthAction::Rejected("Login failed".to_string())));

    state.reduce(Action::Auth(AuthAction::ResetStatus));

    assert!(state.auth.lifecycle.is_idle());
}

#[test]
fn test_session_debug_redacts_token() {
    let mut state = AppState::default();
    state.reduce(Action::Auth(AuthAction::SignedIn(session(Role::Client))));

    let rendered = format!("{state:?}");

    assert!(rendered.contains("<redacted>"));
    assert!(!rendered.contains("token: \"T\""));
}

#[test]
fn given_stale_auth_error_when_signed_out_then_lifecycle_idle() {
    let mut state = AppState::default();
    state.reduce(Action::Auth(AuthAction::SignedIn(session(Role::Developer))));
    state.reduce(Action::Auth(AuthAction::Rejected(
        "Failed to update profile".to_string(),
    )));

    state.reduce(Action::SessionEnded);

    assert!(state.auth.session.is_none());
    assert!(state.auth.lifecycle.is_idle());
}

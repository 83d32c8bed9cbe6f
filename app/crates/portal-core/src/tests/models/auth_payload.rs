use crate::{AuthPayload, Role};

use serde_json::json;

#[test]
fn test_display_name_prefers_name() {
    let payload: AuthPayload = serde_json::from_value(json!({
        "_id": "u1",
        "name": "Dana Scully",
        "firstName": "Ignored",
        "email": "dana@example.com",
        "role": "admin",
        "token": "t"
    }))
    .unwrap();

    assert_eq!(payload.display_name(), "Dana Scully");
}

#[test]
fn test_display_name_joins_first_and_last() {
    let payload: AuthPayload = serde_json::from_value(json!({
        "_id": "u1",
        "firstName": "Fox",
        "lastName": "Mulder",
        "email": "fox@example.com",
        "role": "developer"
    }))
    .unwrap();

    assert_eq!(payload.display_name(), "Fox Mulder");
}

#[test]
fn test_into_session_uses_payload_token() {
    let payload: AuthPayload = serde_json::from_value(json!({
        "_id": "u1",
        "name": "Dana",
        "email": "dana@example.com",
        "role": "teamLead",
        "token": "fresh"
    }))
    .unwrap();

    let session = payload.into_session(Some("held")).unwrap();
    assert_eq!(session.token, "fresh");
    assert_eq!(session.role, Role::TeamLead);
}

#[test]
fn test_into_session_falls_back_to_held_token() {
    let payload: AuthPayload = serde_json::from_value(json!({
        "_id": "u1",
        "name": "Dana",
        "email": "dana@example.com",
        "role": "client"
    }))
    .unwrap();

    let session = payload.clone().into_session(Some("held")).unwrap();
    assert_eq!(session.token, "held");

    assert!(payload.into_session(None).is_err());
}

#[test]
fn test_session_debug_redacts_token() {
    let payload: AuthPayload = serde_json::from_value(json!({
        "_id": "u1",
        "name": "Dana",
        "email": "dana@example.com",
        "role": "admin",
        "token": "super-secret"
    }))
    .unwrap();
    let session = payload.into_session(None).unwrap();

    let debug = format!("{session:?}");
    assert!(!debug.contains("super-secret"));

    let json = serde_json::to_string(&session).unwrap();
    assert!(!json.contains("super-secret"));
}

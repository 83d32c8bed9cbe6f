use crate::{
    ClientDraft, CoreError, Credentials, MilestoneDraft, MilestoneStatus, ProjectDraft,
    ProjectStatus, Role, UserDraft,
};

use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn field_of(err: CoreError) -> &'static str {
    match err {
        CoreError::Validation { field, .. } => field,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn given_complete_project_draft_when_validate_then_ok() {
    let draft = ProjectDraft::new(
        "Site Redesign",
        "c1",
        ProjectStatus::Active,
        date(2024, 1, 1),
        date(2024, 3, 1),
    );
    assert!(draft.validate().is_ok());
}

#[test]
fn given_deadline_before_start_when_validate_then_deadline_error() {
    let draft = ProjectDraft::new(
        "Site Redesign",
        "c1",
        ProjectStatus::Active,
        date(2024, 3, 1),
        date(2024, 1, 1),
    );
    assert_eq!(field_of(draft.validate().unwrap_err()), "deadline");
}

#[test]
fn given_negative_budget_when_validate_then_budget_error() {
    let mut draft = ProjectDraft::new(
        "Site Redesign",
        "c1",
        ProjectStatus::Active,
        date(2024, 1, 1),
        date(2024, 3, 1),
    );
    draft.budget = -1.0;
    assert_eq!(field_of(draft.validate().unwrap_err()), "budget");
}

#[test]
fn given_project_draft_when_serialize_then_camel_case_and_plain_dates() {
    let draft = ProjectDraft::new(
        "Site Redesign",
        "c1",
        ProjectStatus::Active,
        date(2024, 1, 1),
        date(2024, 3, 1),
    );
    let value = serde_json::to_value(&draft).unwrap();

    assert_eq!(value["clientId"], "c1");
    assert_eq!(value["status"], "Active");
    assert_eq!(value["startDate"], "2024-01-01");
    assert_eq!(value["deadline"], "2024-03-01");
    assert!(value.get("initialMilestones").is_none());
}

#[test]
fn given_client_draft_with_password_when_serialize_then_password_omitted() {
    let mut draft = ClientDraft::new("Acme", "ops@acme.com");
    draft.password = Some("hunter22".to_string());

    let value = serde_json::to_value(&draft).unwrap();
    assert!(value.get("password").is_none());
    assert!(draft.validate().is_ok());
}

#[test]
fn given_bad_email_when_validate_client_then_email_error() {
    let draft = ClientDraft::new("Acme", "not-an-email");
    assert_eq!(field_of(draft.validate().unwrap_err()), "email");
}

#[test]
fn given_completed_milestone_without_date_when_validate_then_error() {
    let mut draft = MilestoneDraft::new("Launch", "p1", date(2024, 1, 1), date(2024, 2, 1));
    draft.status = MilestoneStatus::Completed;
    assert_eq!(field_of(draft.validate().unwrap_err()), "completedDate");

    draft.completed_date = Some(date(2024, 1, 30));
    assert!(draft.validate().is_ok());
}

#[test]
fn given_progress_over_100_when_validate_milestone_then_error() {
    let mut draft = MilestoneDraft::new("Launch", "p1", date(2024, 1, 1), date(2024, 2, 1));
    draft.progress_percentage = 101.0;
    assert_eq!(
        field_of(draft.validate().unwrap_err()),
        "progressPercentage"
    );
}

#[test]
fn given_new_user_without_password_when_validate_new_then_error() {
    let draft = UserDraft::new("Dana", "dana@example.com", Role::Developer);
    assert_eq!(field_of(draft.validate_new().unwrap_err()), "password");
    assert!(draft.validate().is_ok());
}

#[test]
fn given_empty_credentials_when_validate_then_error() {
    assert!(Credentials::new("", "secret").validate().is_err());
    assert!(Credentials::new("a@b.co", "").validate().is_err());
    assert!(Credentials::new("a@b.co", "secret").validate().is_ok());
}

#[test]
fn given_project_when_draft_from_then_fields_carried_and_budget_defaults() {
    let project: crate::Project = serde_json::from_value(serde_json::json!({
        "_id": "p1",
        "title": "Site Redesign",
        "client": { "_id": "c1", "name": "Acme" },
        "status": "Paused",
        "startDate": "2024-01-01T00:00:00.000Z",
        "deadline": "2024-03-01",
        "tags": ["web"],
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    }))
    .unwrap();

    let draft = ProjectDraft::from(&project);

    assert_eq!(draft.title, "Site Redesign");
    assert_eq!(draft.client_id, "c1");
    assert_eq!(draft.status, ProjectStatus::Paused);
    assert_eq!(draft.budget, 0.0);
    assert_eq!(draft.tags, vec!["web"]);
    assert!(draft.initial_milestones.is_empty());
    assert!(draft.validate().is_ok());
}

#[test]
fn given_client_when_draft_from_then_password_never_prefilled() {
    let client: crate::Client = serde_json::from_value(serde_json::json!({
        "_id": "c1",
        "name": "Acme",
        "email": "ops@acme.io",
        "phone": "555-0100",
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    }))
    .unwrap();

    let draft = ClientDraft::from(&client);

    assert_eq!(draft.email, "ops@acme.io");
    assert_eq!(draft.phone.as_deref(), Some("555-0100"));
    assert_eq!(draft.password, None);
}

#[test]
fn given_negative_progress_when_validate_milestone_then_error() {
    let mut draft = MilestoneDraft::new("Design", "p1", date(2024, 1, 1), date(2024, 2, 1));
    draft.progress_percentage = -0.5;

    assert_eq!(field_of(draft.validate().unwrap_err()), "progressPercentage");
}

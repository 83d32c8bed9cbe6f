use crate::{Entity, Priority, Project, ProjectStatus};

use chrono::NaiveDate;
use serde_json::json;

fn project_json() -> serde_json::Value {
    json!({
        "_id": "p1",
        "title": "Site Redesign",
        "description": "New marketing site",
        "clientId": "c1",
        "clientName": "Acme",
        "status": "Active",
        "priority": "High",
        "startDate": "2024-01-01T00:00:00.000Z",
        "deadline": "2024-03-01",
        "techStack": ["React", "Node"],
        "assignedDevelopers": [
            { "_id": "u1", "name": "Dana", "email": "dana@example.com", "role": "developer" },
            "u2"
        ],
        "projectManager": { "_id": "u3", "name": "Lee" },
        "budget": 12000.0,
        "spentBudget": 2000.0,
        "createdAt": "2024-01-01T09:00:00.000Z",
        "updatedAt": "2024-01-02T09:00:00.000Z"
    })
}

#[test]
fn test_project_deserializes_canonical_shape() {
    let project: Project = serde_json::from_value(project_json()).unwrap();

    assert_eq!(project.id(), "p1");
    assert_eq!(project.client_id, "c1");
    assert_eq!(project.client_name.as_deref(), Some("Acme"));
    assert_eq!(project.status, ProjectStatus::Active);
    assert_eq!(project.priority, Some(Priority::High));
    assert_eq!(
        project.start_date,
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    );
    assert_eq!(project.deadline, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    assert_eq!(project.assigned_developers, vec!["u1", "u2"]);
    assert_eq!(project.project_manager.as_deref(), Some("u3"));
    assert!(project.milestones.is_empty());
    assert!(!project.is_archived);
}

#[test]
fn test_project_accepts_populated_client_reference() {
    let mut raw = project_json();
    let object = raw.as_object_mut().unwrap();
    object.remove("clientId");
    object.insert(
        "client".to_string(),
        json!({ "_id": "c9", "name": "Globex" }),
    );

    let project: Project = serde_json::from_value(raw).unwrap();
    assert_eq!(project.client_id, "c9");
}

#[test]
fn test_project_involves_developer_and_manager() {
    let project: Project = serde_json::from_value(project_json()).unwrap();

    assert!(project.involves("u1"));
    assert!(project.involves("u3"));
    assert!(!project.involves("u4"));
}

#[test]
fn test_project_is_overdue_only_while_open() {
    let mut project: Project = serde_json::from_value(project_json()).unwrap();
    let after_deadline = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();

    assert!(project.is_overdue(after_deadline));

    project.status = ProjectStatus::Delivered;
    assert!(!project.is_overdue(after_deadline));
}

#[test]
fn test_project_remaining_budget() {
    let mut project: Project = serde_json::from_value(project_json()).unwrap();
    assert_eq!(project.remaining_budget(), Some(10000.0));

    project.budget = None;
    assert_eq!(project.remaining_budget(), None);
}

#[test]
fn test_project_serializes_dates_as_calendar_dates() {
    let project: Project = serde_json::from_value(project_json()).unwrap();
    let value = serde_json::to_value(&project).unwrap();

    assert_eq!(value["_id"], "p1");
    assert_eq!(value["startDate"], "2024-01-01");
    assert_eq!(value["clientId"], "c1");
}

#[test]
fn test_project_accepts_fractional_progress_and_scores() {
    let mut json = project_json();
    json["progressPercent"] = json!(33.5);
    json["satisfaction"] = json!({ "quality": 4.5, "overall": 4 });

    let project: Project = serde_json::from_value(json).unwrap();

    assert_eq!(project.progress_percent, Some(33.5));
    let satisfaction = project.satisfaction.unwrap();
    assert_eq!(satisfaction.quality, Some(4.5));
    assert_eq!(satisfaction.overall, Some(4.0));
}

#[test]
fn test_project_list_with_one_fractional_progress_decodes() {
    let mut fractional = project_json();
    fractional["_id"] = json!("p2");
    fractional["progressPercent"] = json!(66.67);

    let projects: Vec<Project> =
        serde_json::from_value(json!([project_json(), fractional])).unwrap();

    assert_eq!(projects.len(), 2);
    assert_eq!(projects[1].progress_percent, Some(66.67));
}

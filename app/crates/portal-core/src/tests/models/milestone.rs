use crate::{Milestone, MilestoneStatus, Priority};

use serde_json::json;

#[test]
fn test_milestone_deserializes_populated_references() {
    let milestone: Milestone = serde_json::from_value(json!({
        "_id": "m1",
        "title": "Wireframes",
        "project": { "_id": "p1", "title": "Site Redesign" },
        "status": "In Progress",
        "startDate": "2024-01-01",
        "dueDate": "2024-01-15",
        "priority": "Low",
        "assignedTo": [{ "_id": "u1" }, { "_id": "u2" }],
        "dependencies": ["m0"],
        "progressPercentage": 40,
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    }))
    .unwrap();

    assert_eq!(milestone.project_id, "p1");
    assert_eq!(milestone.status, MilestoneStatus::InProgress);
    assert_eq!(milestone.priority, Priority::Low);
    assert!(milestone.is_assigned_to("u2"));
    assert!(milestone.depends_on("m0"));
    assert!(milestone.completed_date.is_none());
}

#[test]
fn test_milestone_null_completed_date_is_none() {
    let milestone: Milestone = serde_json::from_value(json!({
        "_id": "m1",
        "title": "Launch",
        "project": "p1",
        "status": "Not Started",
        "startDate": "2024-02-01",
        "dueDate": "2024-02-15",
        "completedDate": null,
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    }))
    .unwrap();

    assert!(milestone.completed_date.is_none());
    assert_eq!(milestone.priority, Priority::Medium);
    assert_eq!(milestone.progress_percentage, 0.0);
}

#[test]
fn test_milestone_accepts_fractional_progress() {
    let milestone: Milestone = serde_json::from_value(json!({
        "_id": "m2",
        "title": "Build",
        "projectId": "p1",
        "status": "In Progress",
        "startDate": "2024-01-01",
        "dueDate": "2024-02-01",
        "progressPercentage": 62.5,
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    }))
    .unwrap();

    assert_eq!(milestone.progress_percentage, 62.5);
}

mod milestones;
mod state;

use portal_core::{Client, Milestone, Project, Role, Session};

use serde_json::json;

pub(crate) fn project(id: &str, title: &str) -> Project {
    serde_json::from_value(json!({
        "_id": id,
        "title": title,
        "clientId": "c1",
        "status": "Active",
        "startDate": "2024-01-01",
        "deadline": "2024-03-01",
        "createdAt": "2024-01-01T09:00:00.000Z",
        "updatedAt": "2024-01-01T09:00:00.000Z"
    }))
    .unwrap()
}

pub(crate) fn client(id: &str, name: &str) -> Client {
    serde_json::from_value(json!({
        "_id": id,
        "name": name,
        "email": format!("{id}@example.com"),
        "createdAt": "2024-01-01T09:00:00.000Z",
        "updatedAt": "2024-01-01T09:00:00.000Z"
    }))
    .unwrap()
}

pub(crate) fn milestone(id: &str, project_id: &str) -> Milestone {
    serde_json::from_value(json!({
        "_id": id,
        "title": format!("Milestone {id}"),
        "project": project_id,
        "status": "Not Started",
        "startDate": "2024-01-01",
        "dueDate": "2024-01-31",
        "createdAt": "2024-01-01T09:00:00.000Z",
        "updatedAt": "2024-01-01T09:00:00.000Z"
    }))
    .unwrap()
}

pub(crate) fn session(role: Role) -> Session {
    Session {
        id: "u1".to_string(),
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        role,
        token: "T".to_string(),
    }
}

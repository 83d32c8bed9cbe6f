use crate::{MilestoneStatus, Priority, ProjectStatus};

use std::str::FromStr;

#[test]
fn test_project_status_from_str_is_case_insensitive() {
    assert_eq!(
        ProjectStatus::from_str("Active").unwrap(),
        ProjectStatus::Active
    );
    assert_eq!(
        ProjectStatus::from_str("delivered").unwrap(),
        ProjectStatus::Delivered
    );
    assert!(ProjectStatus::from_str("archived").is_err());
}

#[test]
fn test_project_status_default() {
    assert_eq!(ProjectStatus::default(), ProjectStatus::Active);
}

#[test]
fn test_project_status_is_closed() {
    assert!(!ProjectStatus::Active.is_closed());
    assert!(!ProjectStatus::Paused.is_closed());
    assert!(ProjectStatus::Completed.is_closed());
    assert!(ProjectStatus::Delivered.is_closed());
}

#[test]
fn test_milestone_status_wire_names() {
    let json = serde_json::to_string(&MilestoneStatus::NotStarted).unwrap();
    assert_eq!(json, "\"Not Started\"");

    let status: MilestoneStatus = serde_json::from_str("\"In Progress\"").unwrap();
    assert_eq!(status, MilestoneStatus::InProgress);
}

#[test]
fn test_milestone_status_from_cli_forms() {
    assert_eq!(
        MilestoneStatus::from_str("in-progress").unwrap(),
        MilestoneStatus::InProgress
    );
    assert_eq!(
        MilestoneStatus::from_str("not_started").unwrap(),
        MilestoneStatus::NotStarted
    );
    assert!(MilestoneStatus::from_str("blocked").is_err());
}

#[test]
fn test_priority_from_str() {
    assert_eq!(Priority::from_str("HIGH").unwrap(), Priority::High);
    assert_eq!(Priority::default(), Priority::Medium);
    assert!(Priority::from_str("critical").is_err());
}

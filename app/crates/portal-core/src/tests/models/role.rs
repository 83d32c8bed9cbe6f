use crate::{Capability, Role};

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Admin.as_str(), "admin");
    assert_eq!(Role::Developer.as_str(), "developer");
    assert_eq!(Role::TeamLead.as_str(), "teamLead");
    assert_eq!(Role::Client.as_str(), "client");
}

#[test]
fn test_role_from_str() {
    for role in Role::ALL {
        assert_eq!(Role::from_str(role.as_str()).unwrap(), role);
    }
    assert!(Role::from_str("projectManager").is_err());
    assert!(Role::from_str("Admin").is_err());
}

#[test]
fn test_role_serde_uses_wire_names() {
    let json = serde_json::to_string(&Role::TeamLead).unwrap();
    assert_eq!(json, "\"teamLead\"");

    let role: Role = serde_json::from_str("\"client\"").unwrap();
    assert_eq!(role, Role::Client);
}

#[test]
fn test_only_admin_administers_portal() {
    assert!(Role::Admin.grants(Capability::AdministerPortal));
    assert!(!Role::Developer.grants(Capability::AdministerPortal));
    assert!(!Role::TeamLead.grants(Capability::AdministerPortal));
    assert!(!Role::Client.grants(Capability::AdministerPortal));
}

#[test]
fn test_developers_and_team_leads_work_on_projects() {
    assert!(Role::Developer.grants(Capability::WorkOnProjects));
    assert!(Role::TeamLead.grants(Capability::WorkOnProjects));
    assert!(!Role::Client.grants(Capability::WorkOnProjects));
    assert!(!Role::Admin.grants(Capability::WorkOnProjects));
}

#[test]
fn test_every_role_can_edit_own_profile() {
    for role in Role::ALL {
        assert!(role.grants(Capability::EditOwnProfile));
        assert!(role.capabilities().contains(&Capability::EditOwnProfile));
    }
}

#[test]
fn test_client_capabilities() {
    assert_eq!(
        Role::Client.capabilities(),
        vec![Capability::ViewClientPortal, Capability::EditOwnProfile]
    );
}

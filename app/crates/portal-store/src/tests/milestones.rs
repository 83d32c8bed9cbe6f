use super::milestone;
use crate::{MilestoneAction, MilestoneSlice, SliceAction};

fn scoped() -> MilestoneSlice {
    let mut slice = MilestoneSlice::default();
    slice.reduce(MilestoneAction::ProjectFetched {
        project_id: "p1".to_string(),
        milestones: vec![milestone("m1", "p1"), milestone("m2", "p1")],
    });
    slice.reduce(MilestoneAction::AssignedFetched(vec![
        milestone("m2", "p1"),
        milestone("m7", "p4"),
    ]));
    slice
}

#[test]
fn given_project_fetch_then_scope_recorded() {
    let slice = scoped();

    assert_eq!(slice.project_id.as_deref(), Some("p1"));
    assert_eq!(slice.slice.len(), 2);
    assert_eq!(slice.assigned.len(), 2);
}

#[test]
fn given_update_then_both_lists_follow() {
    let mut slice = scoped();
    let mut updated = milestone("m2", "p1");
    updated.progress_percentage = 80.0;

    slice.reduce(MilestoneAction::Entity(SliceAction::Updated(updated)));

    assert_eq!(slice.slice.items[1].progress_percentage, 80.0);
    assert_eq!(slice.assigned[0].progress_percentage, 80.0);
    assert_eq!(slice.assigned[1].id, "m7");
}

#[test]
fn given_delete_then_removed_from_both_lists() {
    let mut slice = scoped();

    slice.reduce(MilestoneAction::Entity(SliceAction::Deleted("m2".to_string())));

    assert_eq!(slice.slice.len(), 1);
    assert_eq!(slice.assigned.len(), 1);
    assert_eq!(slice.assigned[0].id, "m7");
}

#[test]
fn given_milestone_of_other_project_when_created_then_not_listed() {
    let mut slice = scoped();

    slice.reduce(MilestoneAction::Entity(SliceAction::Created(milestone("m9", "p2"))));

    assert_eq!(slice.slice.len(), 2);
    assert!(slice.slice.lifecycle.success);
}

#[test]
fn given_milestone_of_scoped_project_when_created_then_appended() {
    let mut slice = scoped();

    slice.reduce(MilestoneAction::Entity(SliceAction::Created(milestone("m9", "p1"))));

    assert_eq!(slice.slice.items.last().map(|m| m.id.as_str()), Some("m9"));
}

#[test]
fn given_clear_then_scope_and_assigned_dropped() {
    let mut slice = scoped();

    slice.reduce(MilestoneAction::Entity(SliceAction::Clear));

    assert_eq!(slice, MilestoneSlice::default());
}

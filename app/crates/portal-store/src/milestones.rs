use crate::{EntitySlice, SliceAction};

use portal_core::Milestone;

use serde::Serialize;

/// Milestones of one project, plus those assigned to the signed-in user.
///
/// Updates and deletes are mirrored into the assigned list so both views of
/// the same milestone stay identical.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneSlice {
    /// Project the main collection belongs to
    pub project_id: Option<String>,
    #[serde(flatten)]
    pub slice: EntitySlice<Milestone>,
    pub assigned: Vec<Milestone>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MilestoneAction {
    Entity(SliceAction<Milestone>),
    ProjectFetched {
        project_id: String,
        milestones: Vec<Milestone>,
    },
    AssignedFetched(Vec<Milestone>),
}

impl MilestoneSlice {
    /// Whether `milestone` belongs in the main collection
    pub fn in_scope(&self, milestone: &Milestone) -> bool {
        self.project_id
            .as_deref()
            .is_none_or(|project_id| project_id == milestone.project_id)
    }

    pub fn reduce(&mut self, action: MilestoneAction) {
        match action {
            MilestoneAction::ProjectFetched {
                project_id,
                milestones,
            } => {
                self.project_id = Some(project_id);
                self.slice.reduce(SliceAction::FetchedAll(milestones));
            }
            MilestoneAction::AssignedFetched(milestones) => {
                self.assigned = milestones;
                self.slice.lifecycle.fulfil(false);
            }
            MilestoneAction::Entity(SliceAction::Created(milestone))
                if !self.in_scope(&milestone) =>
            {
                self.slice.lifecycle.fulfil(true);
            }
            MilestoneAction::Entity(action) => {
                match &action {
                    SliceAction::Updated(milestone) => {
                        if let Some(slot) = self.assigned.iter_mut().find(|m| m.id == milestone.id) {
                            *slot = milestone.clone();
                        }
                    }
                    SliceAction::Deleted(id) => self.assigned.retain(|m| &m.id != id),
                    SliceAction::Clear => {
                        self.assigned.clear();
                        self.project_id = None;
                    }
                    _ => {}
                }
                self.slice.reduce(action);
            }
        }
    }
}

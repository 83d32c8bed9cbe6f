use crate::{Action, MilestoneAction, Operation, SliceAction, Store, StoreResult};

use portal_core::{Milestone, MilestoneDraft};

impl Store {
    /// Replace the collection with the milestones of `project_id`
    pub async fn fetch_project_milestones(&self, project_id: &str) -> StoreResult<Vec<Milestone>> {
        let milestones = self
            .run::<Milestone, _>(
                Operation::FetchAll,
                self.api.list_project_milestones(project_id),
            )
            .await?;
        self.dispatch(Action::Milestones(MilestoneAction::ProjectFetched {
            project_id: project_id.to_string(),
            milestones: milestones.clone(),
        }));
        Ok(milestones)
    }

    /// Replace the list of milestones assigned to the signed-in user
    pub async fn fetch_assigned_milestones(&self) -> StoreResult<Vec<Milestone>> {
        let milestones = self
            .run::<Milestone, _>(Operation::FetchAll, self.api.list_assigned_milestones())
            .await?;
        self.dispatch(Action::Milestones(MilestoneAction::AssignedFetched(
            milestones.clone(),
        )));
        Ok(milestones)
    }

    pub async fn fetch_milestone(&self, id: &str) -> StoreResult<Milestone> {
        let milestone = self
            .run::<Milestone, _>(Operation::FetchOne, self.api.get_milestone(id))
            .await?;
        self.apply(SliceAction::FetchedOne(milestone.clone()));
        Ok(milestone)
    }

    pub async fn create_milestone(&self, draft: &MilestoneDraft) -> StoreResult<Milestone> {
        draft.validate()?;
        let milestone = self
            .run::<Milestone, _>(Operation::Create, self.api.create_milestone(draft))
            .await?;
        self.apply(SliceAction::Created(milestone.clone()));
        Ok(milestone)
    }

    pub async fn update_milestone(&self, id: &str, draft: &MilestoneDraft) -> StoreResult<Milestone> {
        draft.validate()?;
        let milestone = self
            .run::<Milestone, _>(Operation::Update, self.api.update_milestone(id, draft))
            .await?;
        self.apply(SliceAction::Updated(milestone.clone()));
        Ok(milestone)
    }

    pub async fn delete_milestone(&self, id: &str) -> StoreResult<()> {
        self.run::<Milestone, _>(Operation::Delete, self.api.delete_milestone(id))
            .await?;
        self.apply(SliceAction::<Milestone>::Deleted(id.to_string()));
        Ok(())
    }

    pub fn reset_milestone_status(&self) {
        self.apply(SliceAction::<Milestone>::ResetStatus);
    }

    pub fn clear_selected_milestone(&self) {
        self.apply(SliceAction::<Milestone>::ClearSelected);
    }
}

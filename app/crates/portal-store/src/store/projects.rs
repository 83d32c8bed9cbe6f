use crate::{Operation, SliceAction, Store, StoreResult};

use portal_core::{Project, ProjectDraft};

impl Store {
    pub async fn fetch_projects(&self) -> StoreResult<Vec<Project>> {
        let projects = self
            .run::<Project, _>(Operation::FetchAll, self.api.list_projects())
            .await?;
        self.apply(SliceAction::FetchedAll(projects.clone()));
        Ok(projects)
    }

    pub async fn fetch_project(&self, id: &str) -> StoreResult<Project> {
        let project = self
            .run::<Project, _>(Operation::FetchOne, self.api.get_project(id))
            .await?;
        self.apply(SliceAction::FetchedOne(project.clone()));
        Ok(project)
    }

    pub async fn create_project(&self, draft: &ProjectDraft) -> StoreResult<Project> {
        draft.validate()?;
        let project = self
            .run::<Project, _>(Operation::Create, self.api.create_project(draft))
            .await?;
        self.apply(SliceAction::Created(project.clone()));
        Ok(project)
    }

    pub async fn update_project(&self, id: &str, draft: &ProjectDraft) -> StoreResult<Project> {
        draft.validate()?;
        let project = self
            .run::<Project, _>(Operation::Update, self.api.update_project(id, draft))
            .await?;
        self.apply(SliceAction::Updated(project.clone()));
        Ok(project)
    }

    pub async fn delete_project(&self, id: &str) -> StoreResult<()> {
        self.run::<Project, _>(Operation::Delete, self.api.delete_project(id))
            .await?;
        self.apply(SliceAction::<Project>::Deleted(id.to_string()));
        Ok(())
    }

    pub fn reset_project_status(&self) {
        self.apply(SliceAction::<Project>::ResetStatus);
    }

    pub fn clear_selected_project(&self) {
        self.apply(SliceAction::<Project>::ClearSelected);
    }
}

use crate::{Operation, SliceAction, Store, StoreResult};

use portal_core::{Role, User, UserDraft};

impl Store {
    pub async fn fetch_users(&self) -> StoreResult<Vec<User>> {
        let users = self
            .run::<User, _>(Operation::FetchAll, self.api.list_users())
            .await?;
        self.apply(SliceAction::FetchedAll(users.clone()));
        Ok(users)
    }

    /// Replace the collection with the users holding `role`
    pub async fn fetch_users_by_role(&self, role: Role) -> StoreResult<Vec<User>> {
        let users = self
            .run::<User, _>(Operation::FetchAll, self.api.list_users_by_role(role))
            .await?;
        self.apply(SliceAction::FetchedAll(users.clone()));
        Ok(users)
    }

    pub async fn fetch_user(&self, id: &str) -> StoreResult<User> {
        let user = self
            .run::<User, _>(Operation::FetchOne, self.api.get_user(id))
            .await?;
        self.apply(SliceAction::FetchedOne(user.clone()));
        Ok(user)
    }

    pub async fn create_user(&self, draft: &UserDraft) -> StoreResult<User> {
        draft.validate_new()?;
        let user = self
            .run::<User, _>(Operation::Create, self.api.create_user(draft))
            .await?;
        self.apply(SliceAction::Created(user.clone()));
        Ok(user)
    }

    pub async fn update_user(&self, id: &str, draft: &UserDraft) -> StoreResult<User> {
        draft.validate()?;
        let user = self
            .run::<User, _>(Operation::Update, self.api.update_user(id, draft))
            .await?;
        self.apply(SliceAction::Updated(user.clone()));
        Ok(user)
    }

    pub async fn delete_user(&self, id: &str) -> StoreResult<()> {
        self.run::<User, _>(Operation::Delete, self.api.delete_user(id))
            .await?;
        self.apply(SliceAction::<User>::Deleted(id.to_string()));
        Ok(())
    }

    pub fn reset_user_status(&self) {
        self.apply(SliceAction::<User>::ResetStatus);
    }

    pub fn clear_selected_user(&self) {
        self.apply(SliceAction::<User>::ClearSelected);
    }
}

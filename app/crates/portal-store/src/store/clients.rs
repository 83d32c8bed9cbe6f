//! Client records and the `client`-role login account that shadows each one.
//!
//! The account is matched to its client record by email.

use crate::{Operation, SliceAction, Store, StoreResult};

use portal_api::ClientResult;
use portal_core::{Client, ClientDraft, Role, User, UserDraft};

use log::{debug, info};

impl Store {
    pub async fn fetch_clients(&self) -> StoreResult<Vec<Client>> {
        let clients = self
            .run::<Client, _>(Operation::FetchAll, self.api.list_clients())
            .await?;
        self.apply(SliceAction::FetchedAll(clients.clone()));
        Ok(clients)
    }

    pub async fn fetch_client(&self, id: &str) -> StoreResult<Client> {
        let client = self
            .run::<Client, _>(Operation::FetchOne, self.api.get_client(id))
            .await?;
        self.apply(SliceAction::FetchedOne(client.clone()));
        Ok(client)
    }

    /// Create the client record, first creating its login account when the
    /// draft carries a password.
    pub async fn create_client(&self, draft: &ClientDraft) -> StoreResult<Client> {
        draft.validate()?;
        let client = self
            .run::<Client, _>(Operation::Create, self.create_client_with_account(draft))
            .await?;
        self.apply(SliceAction::Created(client.clone()));
        Ok(client)
    }

    /// Update the client record and keep its login account's name, email and
    /// password in step.
    pub async fn update_client(&self, id: &str, draft: &ClientDraft) -> StoreResult<Client> {
        draft.validate()?;
        let client = self
            .run::<Client, _>(Operation::Update, self.update_client_with_account(id, draft))
            .await?;
        self.apply(SliceAction::Updated(client.clone()));
        Ok(client)
    }

    /// Delete the client record together with its login account
    pub async fn delete_client(&self, id: &str) -> StoreResult<()> {
        self.run::<Client, _>(Operation::Delete, self.delete_client_with_account(id))
            .await?;
        self.apply(SliceAction::<Client>::Deleted(id.to_string()));
        Ok(())
    }

    pub fn reset_client_status(&self) {
        self.apply(SliceAction::<Client>::ResetStatus);
    }

    pub fn clear_selected_client(&self) {
        self.apply(SliceAction::<Client>::ClearSelected);
    }

    async fn create_client_with_account(&self, draft: &ClientDraft) -> ClientResult<Client> {
        if let Some(password) = &draft.password {
            let account = UserDraft {
                password: Some(password.clone()),
                title: draft.company_name.clone(),
                ..UserDraft::new(&draft.name, &draft.email, Role::Client)
            };
            let user = self.api.create_user(&account).await?;
            info!("Created login account {} for client {}", user.id, draft.email);
        }

        self.api.create_client(draft).await
    }

    async fn update_client_with_account(
        &self,
        id: &str,
        draft: &ClientDraft,
    ) -> ClientResult<Client> {
        let current = self.api.get_client(id).await?;

        if let Some(account) = self.find_client_account(&current.email).await? {
            let update = UserDraft {
                name: draft.name.clone(),
                email: draft.email.clone(),
                password: draft.password.clone(),
                role: Role::Client,
                title: draft.company_name.clone().or(account.title),
                department: account.department,
                is_active: account.is_active,
            };
            self.api.update_user(&account.id, &update).await?;
        }

        self.api.update_client(id, draft).await
    }

    async fn delete_client_with_account(&self, id: &str) -> ClientResult<()> {
        let current = self.api.get_client(id).await?;

        if let Some(account) = self.find_client_account(&current.email).await? {
            self.api.delete_user(&account.id).await?;
            info!("Deleted login account {} of client {}", account.id, current.email);
        }

        self.api.delete_client(id).await
    }

    async fn find_client_account(&self, email: &str) -> ClientResult<Option<User>> {
        let accounts = self.api.list_users_by_role(Role::Client).await?;
        let account = accounts
            .into_iter()
            .find(|user| user.email.eq_ignore_ascii_case(email));

        if account.is_none() {
            debug!("No login account for client {email}");
        }
        Ok(account)
    }
}

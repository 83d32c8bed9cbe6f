use crate::{
    Cli, CliError, CliResult,
    client_commands::{ClientCommands, ClientFields},
    commands::Commands,
    milestone_commands::{MilestoneCommands, MilestoneFields},
    project_commands::{ProjectCommands, ProjectFields},
    user_commands::UserCommands,
};

use portal_api::{ApiClient, FileCredentialStore};
use portal_config::Config;
use portal_core::{
    ClientDraft, Credentials, MilestoneDraft, ProfileUpdate, ProjectDraft, Registration, UserDraft,
};
use portal_store::{Navigator, Store, nav_menu};

use std::sync::Arc;

use log::debug;
use serde::Serialize;
use serde_json::{Value, json};

/// Build the store from config; `server` overrides `api.base_url`
pub fn build_store(config: &Config, server: Option<&str>) -> CliResult<Store> {
    let mut api_config = config.api.clone();
    if let Some(server) = server {
        api_config.base_url = server.to_string();
    }

    let credentials = FileCredentialStore::new(
        config.credential_dir()?,
        config.session.credential_key.clone(),
    );
    debug!("Credential file: {}", credentials.path().display());

    let api = ApiClient::from_config(&api_config, Arc::new(credentials))?;
    Ok(Store::new(api))
}

/// Run one command and return its JSON output
pub async fn run(cli: Cli, config: Config) -> CliResult<Value> {
    let store = build_store(&config, cli.server.as_deref())?;
    execute(&store, cli.command).await
}

pub(crate) async fn execute(store: &Store, command: Commands) -> CliResult<Value> {
    match command {
        Commands::Login { email, password } => {
            let session = store.login(&Credentials::new(email, password)).await?;
            to_json(&session)
        }
        Commands::Register {
            name,
            email,
            password,
        } => {
            let registration = Registration {
                name,
                email,
                password,
            };
            let session = store.register(&registration).await?;
            to_json(&session)
        }
        Commands::Logout => {
            store.logout()?;
            Ok(json!({ "signedOut": true }))
        }
        Commands::Whoami => {
            let session = store.fetch_profile().await?;
            to_json(&session)
        }
        Commands::Profile {
            name,
            email,
            title,
            department,
            password,
        } => {
            store.bootstrap().await?;
            if !store.select(|state| state.auth.is_signed_in()) {
                return Err(CliError::not_signed_in());
            }
            let update = ProfileUpdate {
                name,
                email,
                title,
                department,
                password,
                ..ProfileUpdate::default()
            };
            let session = store.update_profile(&update).await?;
            to_json(&session)
        }
        Commands::Project { action } => project(store, action).await,
        Commands::Client { action } => client(store, action).await,
        Commands::Milestone { action } => milestone(store, action).await,
        Commands::User { action } => user(store, action).await,
        Commands::Route { path } => route(store, &path).await,
    }
}

async fn project(store: &Store, action: ProjectCommands) -> CliResult<Value> {
    match action {
        ProjectCommands::List => to_json(&store.fetch_projects().await?),
        ProjectCommands::Get { id } => to_json(&store.fetch_project(&id).await?),
        ProjectCommands::Create {
            title,
            client_id,
            start_date,
            deadline,
            status,
            fields,
        } => {
            let mut draft = ProjectDraft::new(title, client_id, status, start_date, deadline);
            apply_project_fields(&mut draft, fields);
            to_json(&store.create_project(&draft).await?)
        }
        ProjectCommands::Update {
            id,
            title,
            client_id,
            start_date,
            deadline,
            status,
            fields,
        } => {
            let current = store.fetch_project(&id).await?;
            let mut draft = ProjectDraft::from(&current);
            if let Some(title) = title {
                draft.title = title;
            }
            if let Some(client_id) = client_id {
                draft.client_id = client_id;
                draft.client_name = None;
            }
            if let Some(start_date) = start_date {
                draft.start_date = start_date;
            }
            if let Some(deadline) = deadline {
                draft.deadline = deadline;
            }
            if let Some(status) = status {
                draft.status = status;
            }
            apply_project_fields(&mut draft, fields);
            to_json(&store.update_project(&id, &draft).await?)
        }
        ProjectCommands::Delete { id } => {
            store.delete_project(&id).await?;
            Ok(json!({ "deleted": id }))
        }
    }
}

pub(crate) fn apply_project_fields(draft: &mut ProjectDraft, fields: ProjectFields) {
    if let Some(description) = fields.description {
        draft.description = description;
    }
    if fields.priority.is_some() {
        draft.priority = fields.priority;
    }
    if let Some(budget) = fields.budget {
        draft.budget = budget;
    }
    if !fields.developers.is_empty() {
        draft.assigned_developers = fields.developers;
    }
    if !fields.tags.is_empty() {
        draft.tags = fields.tags;
    }
}

async fn client(store: &Store, action: ClientCommands) -> CliResult<Value> {
    match action {
        ClientCommands::List => to_json(&store.fetch_clients().await?),
        ClientCommands::Get { id } => to_json(&store.fetch_client(&id).await?),
        ClientCommands::Create {
            name,
            email,
            fields,
        } => {
            let mut draft = ClientDraft::new(name, email);
            apply_client_fields(&mut draft, fields);
            to_json(&store.create_client(&draft).await?)
        }
        ClientCommands::Update {
            id,
            name,
            email,
            fields,
        } => {
            let current = store.fetch_client(&id).await?;
            let mut draft = ClientDraft::from(&current);
            if let Some(name) = name {
                draft.name = name;
            }
            if let Some(email) = email {
                draft.email = email;
            }
            apply_client_fields(&mut draft, fields);
            to_json(&store.update_client(&id, &draft).await?)
        }
        ClientCommands::Delete { id } => {
            store.delete_client(&id).await?;
            Ok(json!({ "deleted": id }))
        }
    }
}

pub(crate) fn apply_client_fields(draft: &mut ClientDraft, fields: ClientFields) {
    if fields.password.is_some() {
        draft.password = fields.password;
    }
    if fields.phone.is_some() {
        draft.phone = fields.phone;
    }
    if fields.company_name.is_some() {
        draft.company_name = fields.company_name;
    }
    if fields.website.is_some() {
        draft.website = fields.website;
    }
}

async fn milestone(store: &Store, action: MilestoneCommands) -> CliResult<Value> {
    match action {
        MilestoneCommands::List { project_id } => {
            to_json(&store.fetch_project_milestones(&project_id).await?)
        }
        MilestoneCommands::Assigned => to_json(&store.fetch_assigned_milestones().await?),
        MilestoneCommands::Get { id } => to_json(&store.fetch_milestone(&id).await?),
        MilestoneCommands::Create {
            title,
            project_id,
            start_date,
            due_date,
            fields,
        } => {
            let mut draft = MilestoneDraft::new(title, project_id, start_date, due_date);
            apply_milestone_fields(&mut draft, fields);
            to_json(&store.create_milestone(&draft).await?)
        }
        MilestoneCommands::Update {
            id,
            title,
            start_date,
            due_date,
            fields,
        } => {
            let current = store.fetch_milestone(&id).await?;
            let mut draft = MilestoneDraft::from(&current);
            if let Some(title) = title {
                draft.title = title;
            }
            if let Some(start_date) = start_date {
                draft.start_date = start_date;
            }
            if let Some(due_date) = due_date {
                draft.due_date = due_date;
            }
            apply_milestone_fields(&mut draft, fields);
            to_json(&store.update_milestone(&id, &draft).await?)
        }
        MilestoneCommands::Delete { id } => {
            store.delete_milestone(&id).await?;
            Ok(json!({ "deleted": id }))
        }
    }
}

pub(crate) fn apply_milestone_fields(draft: &mut MilestoneDraft, fields: MilestoneFields) {
    if let Some(description) = fields.description {
        draft.description = description;
    }
    if let Some(status) = fields.status {
        draft.status = status;
    }
    if let Some(priority) = fields.priority {
        draft.priority = priority;
    }
    if fields.completed_date.is_some() {
        draft.completed_date = fields.completed_date;
    }
    if let Some(progress) = fields.progress {
        draft.progress_percentage = progress;
    }
    if !fields.assigned_to.is_empty() {
        draft.assigned_to = fields.assigned_to;
    }
}

async fn user(store: &Store, action: UserCommands) -> CliResult<Value> {
    match action {
        UserCommands::List { role: Some(role) } => {
            to_json(&store.fetch_users_by_role(role).await?)
        }
        UserCommands::List { role: None } => to_json(&store.fetch_users().await?),
        UserCommands::Get { id } => to_json(&store.fetch_user(&id).await?),
        UserCommands::Create {
            name,
            email,
            password,
            role,
            title,
            department,
        } => {
            let draft = UserDraft {
                password: Some(password),
                title,
                department,
                ..UserDraft::new(name, email, role)
            };
            to_json(&store.create_user(&draft).await?)
        }
        UserCommands::Update {
            id,
            name,
            email,
            password,
            role,
            title,
            department,
            active,
        } => {
            let current = store.fetch_user(&id).await?;
            let mut draft = UserDraft::from(&current);
            if let Some(name) = name {
                draft.name = name;
            }
            if let Some(email) = email {
                draft.email = email;
            }
            if let Some(role) = role {
                draft.role = role;
            }
            if title.is_some() {
                draft.title = title;
            }
            if department.is_some() {
                draft.department = department;
            }
            if let Some(active) = active {
                draft.is_active = active;
            }
            draft.password = password;
            to_json(&store.update_user(&id, &draft).await?)
        }
        UserCommands::Delete { id } => {
            store.delete_user(&id).await?;
            Ok(json!({ "deleted": id }))
        }
    }
}

/// Where `path` lands for the persisted session, plus that session's menu
async fn route(store: &Store, path: &str) -> CliResult<Value> {
    let outcome = store.bootstrap().await?;
    debug!("Bootstrap outcome: {outcome:?}");

    let navigator = Navigator::new(store, path);
    let role = store.select(|state| state.auth.session.as_ref().map(|s| s.role));

    Ok(json!({
        "requested": path,
        "resolved": navigator.current(),
        "deferred": navigator.is_deferred(),
        "role": role,
        "menu": role.map(nav_menu).unwrap_or_default(),
    }))
}

fn to_json<T: Serialize>(value: &T) -> CliResult<Value> {
    Ok(serde_json::to_value(value)?)
}

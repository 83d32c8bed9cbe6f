pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::address::Address;
pub use models::attachment::Attachment;
pub use models::auth_payload::{AuthPayload, Credentials, Registration};
pub use models::capability::Capability;
pub use models::client::Client;
pub use models::client_draft::ClientDraft;
pub use models::entity::Entity;
pub use models::milestone::Milestone;
pub use models::milestone_draft::MilestoneDraft;
pub use models::milestone_status::MilestoneStatus;
pub use models::priority::Priority;
pub use models::profile_update::ProfileUpdate;
pub use models::project::Project;
pub use models::project_draft::{InitialMilestone, ProjectDraft};
pub use models::project_status::ProjectStatus;
pub use models::role::Role;
pub use models::satisfaction::Satisfaction;
pub use models::session::Session;
pub use models::skill::Skill;
pub use models::user::User;
pub use models::user_draft::UserDraft;

pub mod address;
pub mod attachment;
pub mod auth_payload;
pub mod capability;
pub mod client;
pub mod client_draft;
pub mod dates;
pub mod entity;
pub mod milestone;
pub mod milestone_draft;
pub mod milestone_status;
pub mod priority;
pub mod profile_update;
pub mod project;
pub mod project_draft;
pub mod project_status;
pub mod reference;
pub mod role;
pub mod satisfaction;
pub mod session;
pub mod skill;
pub mod user;
pub mod user_draft;

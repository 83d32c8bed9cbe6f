mod auth_payload;
mod drafts;
mod milestone;
mod project;
mod project_status;
mod reference;
mod role;

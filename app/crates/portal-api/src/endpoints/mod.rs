//! Endpoint wrappers, one `impl ApiClient` block per API area.

mod auth;
mod clients;
mod milestones;
mod projects;
mod users;

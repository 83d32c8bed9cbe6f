use serde::Serialize;

/// What a role is allowed to see or do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Admin dashboard and management of projects, clients and users
    AdministerPortal,
    /// Developer/team-lead dashboard, assigned tasks and projects
    WorkOnProjects,
    /// Client dashboard
    ViewClientPortal,
    EditOwnProfile,
}

impl Capability {
    pub const ALL: [Capability; 4] = [
        Capability::AdministerPortal,
        Capability::WorkOnProjects,
        Capability::ViewClientPortal,
        Capability::EditOwnProfile,
    ];
}

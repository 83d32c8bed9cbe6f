//! The portal's views, who may open them, and where each role lands.

use portal_core::{Capability, Role};

use serde::Serialize;

/// Who may open a view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Only without a session (home, login, registration)
    PublicOnly,
    /// Any session whose role grants the capability
    Requires(Capability),
}

/// Every routable view, with path parameters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    Login,
    Register,
    AdminDashboard,
    AdminProjects,
    AdminProjectNew,
    AdminProject(String),
    AdminProjectEdit(String),
    AdminClients,
    AdminClientNew,
    AdminClient(String),
    AdminClientEdit(String),
    AdminUsers,
    UserDashboard,
    UserTasks,
    UserProjects,
    UserProject(String),
    ClientDashboard,
    EditProfile,
}

impl View {
    /// Match a path to its view. Trailing slashes are ignored.
    pub fn resolve(path: &str) -> Option<View> {
        let segments: Vec<&str> = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        let view = match segments.as_slice() {
            [] => View::Home,
            ["login"] => View::Login,
            ["register"] => View::Register,
            ["admin-dashboard"] => View::AdminDashboard,
            ["admin-dashboard", "projects"] => View::AdminProjects,
            ["admin-dashboard", "projects", "add"] => View::AdminProjectNew,
            ["admin-dashboard", "projects", "edit", id] => View::AdminProjectEdit(id.to_string()),
            ["admin-dashboard", "projects", id] => View::AdminProject(id.to_string()),
            ["admin-dashboard", "clients"] => View::AdminClients,
            ["admin-dashboard", "clients", "add"] => View::AdminClientNew,
            ["admin-dashboard", "clients", "edit", id] => View::AdminClientEdit(id.to_string()),
            ["admin-dashboard", "clients", id] => View::AdminClient(id.to_string()),
            ["admin-dashboard", "users"] => View::AdminUsers,
            ["user-dashboard"] => View::UserDashboard,
            ["user-dashboard", "tasks"] => View::UserTasks,
            ["user-dashboard", "projects"] => View::UserProjects,
            ["user-dashboard", "projects", id] => View::UserProject(id.to_string()),
            ["user-dashboard", "clients"] => View::ClientDashboard,
            ["user-dashboard", "edit-profile"] => View::EditProfile,
            _ => return None,
        };
        Some(view)
    }

    pub fn path(&self) -> String {
        match self {
            View::Home => "/".to_string(),
            View::Login => "/login".to_string(),
            View::Register => "/register".to_string(),
            View::AdminDashboard => "/admin-dashboard".to_string(),
            View::AdminProjects => "/admin-dashboard/projects".to_string(),
            View::AdminProjectNew => "/admin-dashboard/projects/add".to_string(),
            View::AdminProject(id) => format!("/admin-dashboard/projects/{id}"),
            View::AdminProjectEdit(id) => format!("/admin-dashboard/projects/edit/{id}"),
            View::AdminClients => "/admin-dashboard/clients".to_string(),
            View::AdminClientNew => "/admin-dashboard/clients/add".to_string(),
            View::AdminClient(id) => format!("/admin-dashboard/clients/{id}"),
            View::AdminClientEdit(id) => format!("/admin-dashboard/clients/edit/{id}"),
            View::AdminUsers => "/admin-dashboard/users".to_string(),
            View::UserDashboard => "/user-dashboard".to_string(),
            View::UserTasks => "/user-dashboard/tasks".to_string(),
            View::UserProjects => "/user-dashboard/projects".to_string(),
            View::UserProject(id) => format!("/user-dashboard/projects/{id}"),
            View::ClientDashboard => "/user-dashboard/clients".to_string(),
            View::EditProfile => "/user-dashboard/edit-profile".to_string(),
        }
    }

    pub fn access(&self) -> Access {
        match self {
            View::Home | View::Login | View::Register => Access::PublicOnly,
            View::AdminDashboard
            | View::AdminProjects
            | View::AdminProjectNew
            | View::AdminProject(_)
            | View::AdminProjectEdit(_)
            | View::AdminClients
            | View::AdminClientNew
            | View::AdminClient(_)
            | View::AdminClientEdit(_)
            | View::AdminUsers => Access::Requires(Capability::AdministerPortal),
            View::UserDashboard | View::UserTasks | View::UserProjects | View::UserProject(_) => {
                Access::Requires(Capability::WorkOnProjects)
            }
            View::ClientDashboard => Access::Requires(Capability::ViewClientPortal),
            View::EditProfile => Access::Requires(Capability::EditOwnProfile),
        }
    }

    /// Whether a session with `role` may open this view
    pub fn allows(&self, role: Role) -> bool {
        match self.access() {
            Access::PublicOnly => false,
            Access::Requires(capability) => role.grants(capability),
        }
    }
}

/// Default landing view for a role
pub fn role_home(role: Role) -> View {
    if role.grants(Capability::AdministerPortal) {
        View::AdminDashboard
    } else if role.grants(Capability::ViewClientPortal) {
        View::ClientDashboard
    } else {
        View::UserDashboard
    }
}

/// One entry of the navigation menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub path: String,
}

impl NavItem {
    fn new(label: &'static str, view: View) -> Self {
        Self {
            label,
            path: view.path(),
        }
    }
}

/// Navigation menu shown to `role`
pub fn nav_menu(role: Role) -> Vec<NavItem> {
    let items = match role_home(role) {
        View::AdminDashboard => vec![
            NavItem::new("Dashboard", View::AdminDashboard),
            NavItem::new("Projects", View::AdminProjects),
            NavItem::new("Clients", View::AdminClients),
            NavItem::new("Users", View::AdminUsers),
        ],
        View::ClientDashboard => vec![
            NavItem::new("Dashboard", View::ClientDashboard),
            NavItem::new("Profile", View::EditProfile),
        ],
        _ => vec![
            NavItem::new("Dashboard", View::UserDashboard),
            NavItem::new("My Tasks", View::UserTasks),
            NavItem::new("Projects", View::UserProjects),
        ],
    };

    items
        .into_iter()
        .filter(|item| View::resolve(&item.path).is_some_and(|view| view.allows(role)))
        .collect()
}

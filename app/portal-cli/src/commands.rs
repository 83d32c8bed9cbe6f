use crate::{
    client_commands::ClientCommands, milestone_commands::MilestoneCommands,
    project_commands::ProjectCommands, user_commands::UserCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Sign in and persist the credential
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Create an account and sign in as it
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Discard the persisted credential
    Logout,

    /// Show the signed-in session
    Whoami,

    /// Update your own profile
    Profile {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },

    /// Project operations
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },

    /// Client operations
    Client {
        #[command(subcommand)]
        action: ClientCommands,
    },

    /// Milestone operations
    Milestone {
        #[command(subcommand)]
        action: MilestoneCommands,
    },

    /// User account operations (admin)
    User {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Resolve a view path against the current session
    Route {
        /// Path to open, e.g. /admin-dashboard/projects
        path: String,
    },
}

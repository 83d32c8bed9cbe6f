use portal_core::Role;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum UserCommands {
    /// List user accounts
    List {
        /// Only accounts with this role (admin, developer, teamLead, client)
        #[arg(long)]
        role: Option<Role>,
    },
    /// Get a user account by ID
    Get {
        /// User ID
        id: String,
    },
    /// Create a user account
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        role: Role,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        department: Option<String>,
    },
    /// Update a user account (unset fields keep their current value)
    Update {
        /// User ID
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        password: Option<String>,

        #[arg(long)]
        role: Option<Role>,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        department: Option<String>,

        /// Activate or deactivate the account
        #[arg(long)]
        active: Option<bool>,
    },
    /// Delete a user account
    Delete {
        /// User ID
        id: String,
    },
}

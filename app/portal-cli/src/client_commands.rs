use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum ClientCommands {
    /// List all clients
    List,
    /// Get a client by ID
    Get {
        /// Client ID
        id: String,
    },
    /// Create a client (with a login account when --password is given)
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[command(flatten)]
        fields: ClientFields,
    },
    /// Update a client and its login account
    Update {
        /// Client ID
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[command(flatten)]
        fields: ClientFields,
    },
    /// Delete a client and its login account
    Delete {
        /// Client ID
        id: String,
    },
}

/// Optional fields shared by create and update
#[derive(Args)]
pub struct ClientFields {
    /// Password for the client's login account
    #[arg(long)]
    pub password: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub company_name: Option<String>,

    #[arg(long)]
    pub website: Option<String>,
}

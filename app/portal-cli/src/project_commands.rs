use portal_core::{Priority, ProjectStatus};

use chrono::NaiveDate;
use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// List all projects
    List,
    /// Get a project by ID
    Get {
        /// Project ID
        id: String,
    },
    /// Create a new project
    Create {
        #[arg(long)]
        title: String,

        /// Client ID
        #[arg(long)]
        client_id: String,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start_date: NaiveDate,

        /// Deadline (YYYY-MM-DD)
        #[arg(long)]
        deadline: NaiveDate,

        /// Active, Paused, Completed or Delivered (default: Active)
        #[arg(long, default_value = "Active")]
        status: ProjectStatus,

        #[command(flatten)]
        fields: ProjectFields,
    },
    /// Update a project (unset fields keep their current value)
    Update {
        /// Project ID
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        client_id: Option<String>,

        #[arg(long)]
        start_date: Option<NaiveDate>,

        #[arg(long)]
        deadline: Option<NaiveDate>,

        #[arg(long)]
        status: Option<ProjectStatus>,

        #[command(flatten)]
        fields: ProjectFields,
    },
    /// Delete a project
    Delete {
        /// Project ID
        id: String,
    },
}

/// Optional fields shared by create and update
#[derive(Args)]
pub struct ProjectFields {
    #[arg(long)]
    pub description: Option<String>,

    /// High, Medium or Low
    #[arg(long)]
    pub priority: Option<Priority>,

    #[arg(long)]
    pub budget: Option<f64>,

    /// Assigned developer ID (repeatable)
    #[arg(long = "developer")]
    pub developers: Vec<String>,

    /// Tag (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,
}

use portal_core::{MilestoneStatus, Priority};

use chrono::NaiveDate;
use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum MilestoneCommands {
    /// List the milestones of a project
    List {
        /// Project ID
        #[arg(long)]
        project_id: String,
    },
    /// List milestones assigned to you
    Assigned,
    /// Get a milestone by ID
    Get {
        /// Milestone ID
        id: String,
    },
    /// Create a milestone
    Create {
        #[arg(long)]
        title: String,

        /// Project ID
        #[arg(long)]
        project_id: String,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start_date: NaiveDate,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due_date: NaiveDate,

        #[command(flatten)]
        fields: MilestoneFields,
    },
    /// Update a milestone (unset fields keep their current value)
    Update {
        /// Milestone ID
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        start_date: Option<NaiveDate>,

        #[arg(long)]
        due_date: Option<NaiveDate>,

        #[command(flatten)]
        fields: MilestoneFields,
    },
    /// Delete a milestone
    Delete {
        /// Milestone ID
        id: String,
    },
}

/// Optional fields shared by create and update
#[derive(Args)]
pub struct MilestoneFields {
    #[arg(long)]
    pub description: Option<String>,

    /// "Not Started", "In Progress", Completed or Delayed
    #[arg(long)]
    pub status: Option<MilestoneStatus>,

    /// High, Medium or Low
    #[arg(long)]
    pub priority: Option<Priority>,

    /// Completion date (YYYY-MM-DD)
    #[arg(long)]
    pub completed_date: Option<NaiveDate>,

    /// Progress 0-100
    #[arg(long)]
    pub progress: Option<f64>,

    /// Assigned user ID (repeatable)
    #[arg(long = "assign")]
    pub assigned_to: Vec<String>,
}

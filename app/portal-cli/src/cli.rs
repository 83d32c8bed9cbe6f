use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "portal")]
#[command(about = "Business portal CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// API base URL including the /api prefix (overrides api.base_url)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}

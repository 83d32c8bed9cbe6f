//! portal - business portal CLI
//!
//! Drives the portal's client state layer from the command line: signs in,
//! keeps the credential between runs, and runs CRUD operations through the
//! same store a UI would use.
//!
//! # Examples
//!
//! ```bash
//! # Sign in (the credential is persisted for later commands)
//! portal login --email ada@example.com --password secret1
//!
//! # List projects
//! portal project list --pretty
//!
//! # Where would this path land for the current session?
//! portal route /admin-dashboard/users
//! ```

use portal_cli::{Cli, logger, run};
use portal_config::Config;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load().and_then(|config| config.validate().map(|()| config)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logger::initialize(
        config.logging.level,
        config.logging.file.as_deref().map(Into::into),
        config.logging.colored,
    ) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    config.log_summary();

    let pretty = cli.pretty;
    match run(cli, config).await {
        Ok(value) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{json}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            log::debug!("{e}");
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

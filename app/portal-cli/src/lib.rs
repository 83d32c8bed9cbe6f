//! portal-cli library
//!
//! Argument definitions and the command runner, exported for the binary and
//! for tests.

pub(crate) mod cli;
pub(crate) mod client_commands;
pub(crate) mod commands;
pub(crate) mod error;
pub mod logger;
pub(crate) mod milestone_commands;
pub(crate) mod project_commands;
pub(crate) mod runner;
pub(crate) mod user_commands;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use error::{CliError, Result as CliResult};
pub use runner::{build_store, run};

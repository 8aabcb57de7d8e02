//! CLI module for sceneconf
//!
//! One command for now:
//! - check: validate a project's app-config document and print findings

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{check, run, run_command};
pub use errors::{CliError, CliResult};

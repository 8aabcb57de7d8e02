//! CLI argument definitions using clap
//!
//! Commands:
//! - sceneconf check [--project-root <dir>] [--config <rel>] [--json]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// sceneconf - structural validator for SceneGraph app-config documents
#[derive(Parser, Debug)]
#[command(name = "sceneconf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate the app-config document of a project
    Check {
        /// Project root the asset checks resolve against
        #[arg(long, default_value = ".")]
        project_root: PathBuf,

        /// Config document path, relative to the project root
        #[arg(long, default_value = "assets/meta/app.config.json")]
        config: PathBuf,

        /// Emit diagnostics as a JSON array instead of text lines
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

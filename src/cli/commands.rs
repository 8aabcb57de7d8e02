//! CLI command implementations
//!
//! `check` runs one validation pass: read the document, validate against
//! the project filesystem, print findings. Exit is clean only when the
//! document produced no diagnostics.

use std::fs;
use std::path::Path;

use crate::observability::Logger;
use crate::reference::FsAssetHost;
use crate::validator::DocumentValidator;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Main CLI entry point; the only function main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Check {
            project_root,
            config,
            json,
        } => check(&project_root, &config, json),
    }
}

/// Validate one project's app-config document.
pub fn check(project_root: &Path, config: &Path, json: bool) -> CliResult<()> {
    let config_path = project_root.join(config);

    Logger::info(
        "validate.start",
        &[
            ("config", &config_path.display().to_string()),
            ("project", &project_root.display().to_string()),
        ],
    );

    let source = fs::read_to_string(&config_path).map_err(|err| {
        Logger::error(
            "validate.error",
            &[
                ("config", &config_path.display().to_string()),
                ("detail", &err.to_string()),
            ],
        );
        CliError::config_read(&config_path, err)
    })?;

    let host = FsAssetHost::new(project_root);
    let diagnostics = DocumentValidator::new(&host).validate(&source);

    if json {
        println!("{}", serde_json::to_string_pretty(&diagnostics)?);
    } else {
        for diagnostic in &diagnostics {
            println!("{}", diagnostic);
        }
    }

    if diagnostics.is_empty() {
        Logger::info("validate.complete", &[("diagnostics", "0")]);
        Ok(())
    } else {
        Logger::warn(
            "validate.complete",
            &[("diagnostics", &diagnostics.len().to_string())],
        );
        Err(CliError::FindingsReported(diagnostics.len()))
    }
}

//! CLI-specific error types
//!
//! CLI errors cover the run itself (I/O, serialization); validation
//! findings are never errors, they are part of the check's output.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that abort a CLI run
#[derive(Debug, Error)]
pub enum CliError {
    /// Config document could not be read
    #[error("cannot read config document '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Diagnostics could not be serialized for --json output
    #[error("cannot serialize diagnostics: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The document had findings; carries the count for the exit path
    #[error("validation found {0} issue(s)")]
    FindingsReported(usize),
}

impl CliError {
    pub fn config_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigRead {
            path: path.into(),
            source,
        }
    }
}

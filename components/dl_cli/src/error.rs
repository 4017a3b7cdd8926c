//! Error types for the CLI

use core_types::DlError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Source file could not be opened
    #[error("cannot open {path}: {source}")]
    Io {
        /// File that failed to open
        path: String,
        /// Underlying failure
        source: std::io::Error,
    },

    /// Scanning, parsing or symbol resolution failed
    #[error(transparent)]
    Frontend(#[from] DlError),

    /// Output could not be rendered as JSON
    #[error("cannot render output: {0}")]
    Render(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Io { .. } => 66,
            CliError::Frontend(_) => 65,
            CliError::Render(_) => 70,
        }
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

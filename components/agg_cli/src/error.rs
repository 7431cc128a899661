//! Error types for the CLI.

use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Scenario file could not be read
    #[error("could not read scenario file: {0}")]
    Io(#[from] std::io::Error),

    /// Scenario or report JSON was malformed
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

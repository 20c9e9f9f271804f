//! Error types for the runner.

use netdim_core::ParamError;
use netdim_report::ExportError;
use thiserror::Error;

/// Result type for runner operations.
pub type RunnerResult<T> = Result<T, RunnerError>;

/// Errors surfaced to the user by the CLI and the shell.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The YAML configuration could not be parsed.
    #[error("configuration error: {0}")]
    Config(#[from] serde_yaml::Error),

    /// A JSON document could not be written.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A network or parameter name was not recognised.
    #[error(transparent)]
    Param(#[from] ParamError),

    /// A snapshot, report or store operation failed.
    #[error(transparent)]
    Export(#[from] ExportError),

    /// The shell did not recognise the command word.
    #[error("unknown command '{0}' (type 'help')")]
    UnknownCommand(String),

    /// A known command was given the wrong arguments.
    #[error("usage: {0}")]
    Usage(&'static str),
}

//! Error types for export, report and store operations.

use netdim_core::NetworkType;
use thiserror::Error;

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors that can occur while writing or reading exported files.
#[derive(Debug, Error)]
pub enum ExportError {
    /// I/O error reading or writing a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The parameters in a document belong to another network type.
    #[error("document declares {declared} but its parameters are for {found}")]
    NetworkMismatch {
        /// Network named by the document.
        declared: NetworkType,
        /// Network the parameters actually describe.
        found: NetworkType,
    },

    /// A store entry is filed under another network's key.
    #[error("store key '{key}' holds a project for {network}")]
    KeyMismatch {
        /// Key the record was found under.
        key: String,
        /// Network of the record.
        network: NetworkType,
    },

    /// No project is stored for the network type.
    #[error("no saved project for {0}")]
    ProjectNotFound(NetworkType),
}

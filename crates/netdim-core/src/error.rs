//! Error types for the dimensioning core.

use thiserror::Error;

/// Result type for parameter and label handling.
pub type ParamResult<T> = Result<T, ParamError>;

/// Errors raised while naming networks or parameters.
///
/// The formulas themselves never fail; these errors only come from
/// translating user-facing names into typed values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    /// The network identifier does not name one of the five network types.
    #[error("unknown network type '{0}' (expected gsm, umts, lte, hertzien or optique)")]
    UnknownNetwork(String),

    /// The parameter does not exist for the given network type.
    #[error("unknown parameter '{name}' for {network}")]
    UnknownParameter {
        /// Network the lookup was made against.
        network: String,
        /// Requested parameter name.
        name: String,
    },

    /// A `name=value` assignment could not be split.
    #[error("invalid assignment '{0}' (expected name=value)")]
    InvalidAssignment(String),

    /// A capacity label could not be parsed back into a value and unit.
    #[error("invalid capacity label '{0}'")]
    InvalidCapacity(String),
}

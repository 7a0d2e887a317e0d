//! Error types for the winters-forecast library.

use thiserror::Error;

/// Result type alias for forecast operations.
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur while bootstrapping or building a model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// A smoothing constant lies outside the open interval (0, 1).
    #[error("smoothing constant `{name}` must lie strictly between 0 and 1, got {value}")]
    InvalidSmoothingConstant { name: &'static str, value: f64 },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Dimension mismatch between data structures.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// A phase of the seasonal cycle has no defined observed coefficient.
    #[error("no observed seasonal coefficient for cycle phase {phase}")]
    UndefinedSeasonalPhase { phase: usize },

    /// Computation error (e.g., numerical issues).
    #[error("computation error: {0}")]
    ComputationError(String),
}

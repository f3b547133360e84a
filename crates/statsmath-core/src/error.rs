// =============================================================================
// Error Types
// =============================================================================
//
// The plain functions in `descriptive` never fail: bad input turns into NaN or
// Infinity through ordinary floating-point arithmetic. The `checked` and
// `inference` modules validate their input first and report problems here.
//
// =============================================================================

use thiserror::Error;

/// Errors reported by the validating functions of this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsMathError {
    /// Two samples that must be paired have different lengths.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// A sample has no observations.
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// A sample has too few observations for the requested statistic.
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    /// An input or intermediate value makes the result undefined.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, StatsMathError>;

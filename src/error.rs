//! Error types for vector operations

use thiserror::Error;

/// Result type for vector operations
pub type Result<T> = std::result::Result<T, VectorError>;

/// Errors reported by fallible vector operations
///
/// Only operations with a length requirement can fail. Elementwise `add`
/// and `sub` truncate to the shorter operand instead of reporting an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VectorError {
    /// Two operands that must have equal length do not (dot, Hadamard)
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Length of the receiver
        expected: usize,
        /// Length of the other operand
        actual: usize,
    },

    /// Operand length differs from the fixed dimension an operation requires (cross)
    #[error("Invalid dimension: expected {expected}, got {actual}")]
    InvalidDimension {
        /// Required length
        expected: usize,
        /// Length of the first offending operand
        actual: usize,
    },
}

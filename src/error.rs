//! Failure taxonomy for operation evaluation and dispatch
//!
//! Operations surface every failure immediately to the caller; there are no
//! retries, no partial results, and no silent clamping or NaN substitution.
//! The host decides how to present a failure to the user.

use thiserror::Error;

use crate::value::DataType;

/// Errors raised while evaluating or dispatching an operation.
///
/// `DivisionByZero`, `InvalidDomain`, and `InvalidRange` come from the
/// operations themselves; the remaining variants come from the registry's
/// input validation before an operation runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvokeError {
    /// Divisor (or round-to-multiple base) was zero
    #[error("division by zero")]
    DivisionByZero,

    /// Argument outside a function's mathematical domain
    #[error("invalid domain: {reason}")]
    InvalidDomain {
        /// What the operation requires of its argument
        reason: &'static str,
    },

    /// Random bounds where low >= high
    #[error("invalid random range: low must be strictly below high")]
    InvalidRange,

    /// No operation registered under the requested key
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// Wrong number of inputs for the operation
    #[error("expected {expected} inputs, got {got}")]
    ArityMismatch {
        /// Inputs the operation declares
        expected: usize,
        /// Inputs actually supplied
        got: usize,
    },

    /// An input had the wrong data type
    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        /// The declared port type
        expected: DataType,
        /// The type actually supplied
        got: DataType,
    },
}

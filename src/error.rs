//! Error types for orientation math.
//!
//! Almost every operation in this crate is total over its numeric domain.
//! The exceptions are divisions whose divisor (a scalar or a quaternion's
//! norm) is zero, and decoding a raw joint index that the skeleton does not
//! define.

use thiserror::Error;

/// Result type for fallible orientation operations
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during orientation math
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum MathError {
    /// Division by a zero scalar, or reciprocal of a zero-norm quaternion
    #[error("division by zero")]
    DivisionByZero,

    /// Raw joint index outside the 25-joint skeleton
    #[error("unknown joint index: {0}")]
    UnknownJoint(u8),
}

// src/common.rs

/// Shape precondition violations. The engine never pads, truncates or
/// falls back to another transform size; the caller must supply a
/// conforming buffer.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ShapeError {
    /// Input length is not a positive power of two.
    NotPowerOfTwo,
    /// Real and imaginary components have different lengths.
    LengthMismatch,
}

use core::fmt;

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::NotPowerOfTwo => write!(f, "Input size must be a power of 2"),
            ShapeError::LengthMismatch => {
                write!(f, "Real and imaginary components must have the same length")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ShapeError {}

//! # Error Types
//!
//! Errors raised while parsing shared primitives from text.

use thiserror::Error;

/// Failure to parse a 32-byte identifier from hex text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBytesError {
    /// The text contains characters outside `[0-9a-fA-F]`.
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// The decoded value is not 32 bytes long.
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

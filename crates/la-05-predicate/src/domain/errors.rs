//! Predicate error types.

use la_04_account::AccountError;
use thiserror::Error;

/// Errors that can occur while building or using a predicate account.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PredicateError {
    /// Bytecode text is not hex
    #[error("Invalid bytecode: {0}")]
    InvalidBytecode(String),

    /// A configurable patch does not fit inside the bytecode
    #[error("Configurable at offset {offset} with {len} bytes exceeds bytecode of {bytecode_len} bytes")]
    ConfigurableOutOfBounds {
        offset: usize,
        len: usize,
        bytecode_len: usize,
    },

    /// Input data does not fit the ABI's `main` signature
    #[error("Input data mismatch: {0}")]
    InputDataMismatch(String),

    /// ABI is malformed or uses a type this crate cannot check
    #[error("Invalid ABI: {0}")]
    InvalidAbi(String),

    #[error(transparent)]
    Account(#[from] AccountError),
}

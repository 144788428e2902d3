//! # Address Errors
//!
//! Every failure here is a local, synchronous validation error.

use thiserror::Error;

/// Errors that can occur while constructing an [`Address`](super::address::Address).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AddressError {
    /// The text is not valid hex or not a valid checksummed address
    #[error("Invalid address encoding: {0}")]
    InvalidEncoding(String),

    /// The decoded value is not 32 bytes
    #[error("Invalid address length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Public key is neither 64 bytes nor a 65-byte `0x04`-tagged key
    #[error("Invalid public key: {length} bytes")]
    InvalidPublicKey { length: usize },

    /// Neither the hex nor the checksummed parser accepted the input
    #[error("Unresolvable address: {0}")]
    UnresolvableAddress(String),
}

//! # Signer Errors
//!
//! A valid-format signature from the wrong key is not an error at the
//! recovery layer; it only becomes [`SignerError::SignerMismatch`] when the
//! caller asks for a comparison.

use la_01_address_codec::Address;
use shared_crypto::CryptoError;
use thiserror::Error;

/// Errors that can occur while signing or recovering.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignerError {
    /// Private key is malformed hex or an out-of-range scalar
    #[error("Invalid private key: {0}")]
    InvalidKey(CryptoError),

    /// Signature is the wrong length or not a valid secp256k1 signature
    #[error("Invalid signature: {0}")]
    InvalidSignature(String),

    /// Recovered signer does not match expected signer
    #[error("Signer mismatch: expected {expected}, got {actual}")]
    SignerMismatch { expected: Address, actual: Address },

    /// The signing backend refused the digest
    #[error("Signing failed: {0}")]
    SigningFailed(String),
}

//! Crypto error types.

use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// Invalid key length
    #[error("Invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength {
        /// Expected key length in bytes
        expected: usize,
        /// Actual key length in bytes
        actual: usize,
    },

    /// Private key is not valid hex or not a scalar in `[1, n-1]`
    #[error("Invalid private key")]
    InvalidPrivateKey,

    /// Public key is not a point on the curve
    #[error("Invalid public key")]
    InvalidPublicKey,

    /// Signature bytes or recovery id are malformed
    #[error("Invalid signature")]
    InvalidSignature,

    /// The signing backend refused the digest
    #[error("Signing failed: {0}")]
    SigningFailed(String),
}

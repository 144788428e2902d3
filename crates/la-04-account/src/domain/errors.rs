//! Account error types.

use la_01_address_codec::Address;
use la_02_signer::SignerError;
use la_03_resource_selection::{ProviderError, SelectionError};
use shared_crypto::CryptoError;
use thiserror::Error;

/// Errors that can occur in account operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountError {
    /// Private key is malformed hex or an out-of-range scalar
    #[error("Invalid private key: {0}")]
    InvalidKey(CryptoError),

    /// Operation needs a signing key but the account is locked
    #[error("Account is locked: no signing key")]
    NoSigningKey,

    /// Operation needs a provider but none is bound
    #[error("No provider configured")]
    NoProviderConfigured,

    /// Key does not control the account's address
    #[error("Key mismatch: account is {expected}, key controls {actual}")]
    KeyMismatch { expected: Address, actual: Address },

    /// Transfer amount must be positive
    #[error("Transfer amount must be greater than zero")]
    InvalidAmount,

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Signer(SignerError),
}

impl From<SignerError> for AccountError {
    fn from(error: SignerError) -> Self {
        match error {
            SignerError::InvalidKey(e) => Self::InvalidKey(e),
            other => Self::Signer(other),
        }
    }
}

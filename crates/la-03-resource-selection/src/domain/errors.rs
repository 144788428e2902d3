//! Selection error types.

use crate::ports::outbound::ProviderError;
use shared_types::{AssetId, U256};
use thiserror::Error;

/// Errors that can occur during coin selection.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// Owned coins of this asset do not reach the requested minimum
    #[error("Insufficient funds for asset {asset}: required {required}, available {available}")]
    InsufficientFunds {
        asset: AssetId,
        required: U256,
        available: U256,
    },

    /// Query is internally inconsistent
    #[error("Invalid query for asset {asset}: {reason}")]
    InvalidQuery { asset: AssetId, reason: String },

    /// The same asset was requested twice in one call
    #[error("Asset {0} requested more than once")]
    DuplicateAsset(AssetId),

    /// Selection needs more inputs than a transaction may carry
    #[error("Selection needs {selected} inputs, limit is {limit}")]
    TooManyInputs { selected: usize, limit: usize },

    /// Selector configuration rejected
    #[error("Invalid selector config: {0}")]
    InvalidConfig(String),

    /// Coin-listing collaborator failed
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

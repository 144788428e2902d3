//! Outbound (Driven) ports for the Resource Selection subsystem.
//!
//! The selector never talks to the ledger directly; it asks a
//! [`CoinSource`] for the coins an address owns.

use crate::domain::entities::Coin;
use async_trait::async_trait;
use la_01_address_codec::Address;
use shared_types::AssetId;
use thiserror::Error;

/// Failure reported by a ledger collaborator.
///
/// Passed through unchanged by every subsystem that calls a collaborator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    /// Could not reach the node
    #[error("Connection error: {0}")]
    Connection(String),

    /// Node did not answer in time
    #[error("Request timed out")]
    Timeout,

    /// Node answered with an error
    #[error("Query failed: {0}")]
    Query(String),

    /// Node refused a transaction
    #[error("Transaction rejected: {0}")]
    Rejected(String),

    /// Transaction was included but reverted
    #[error("Transaction reverted: {0}")]
    Reverted(String),
}

/// Coin-listing collaborator.
///
/// Implementations return a snapshot; coins are not reserved between calls.
#[async_trait]
pub trait CoinSource: Send + Sync {
    /// Lists unspent coins owned by `owner`, optionally filtered by asset.
    ///
    /// # Errors
    /// - `ProviderError`: the collaborator failed; passed through as-is
    async fn list_coins(
        &self,
        owner: &Address,
        asset_id: Option<AssetId>,
    ) -> Result<Vec<Coin>, ProviderError>;
}

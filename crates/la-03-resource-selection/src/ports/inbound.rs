//! # Inbound Port - ResourceSelectionApi
//!
//! Driving port used by accounts to fund transfers and report balances.

use crate::domain::entities::{AssetBalance, Coin, SpendQuery};
use crate::domain::errors::SelectionError;
use async_trait::async_trait;
use la_01_address_codec::Address;
use shared_types::UtxoId;

/// Primary API for the Resource Selection subsystem.
///
/// # Example
///
/// ```rust,ignore
/// use la_03_resource_selection::{ResourceSelectionApi, SpendQuery};
///
/// async fn fund(selector: &impl ResourceSelectionApi, owner: &Address) {
///     let queries = [SpendQuery::new(BASE_ASSET_ID, 32u64).with_max(42u64)];
///     let coins = selector.select_resources(owner, &queries, &[]).await?;
/// }
/// ```
#[async_trait]
pub trait ResourceSelectionApi: Send + Sync {
    /// Selects coins owned by `owner` covering every query.
    ///
    /// Assets are processed in ascending id order and the result keeps that
    /// order; within one asset, coins appear in selection order.
    ///
    /// # Errors
    /// - `DuplicateAsset`: an asset appears in two queries
    /// - `InvalidQuery`: a ceiling is below its minimum
    /// - `InsufficientFunds`: an asset cannot be covered
    /// - `TooManyInputs`: the union exceeds the configured input limit
    /// - `Provider`: the coin source failed
    async fn select_resources(
        &self,
        owner: &Address,
        queries: &[SpendQuery],
        excluded: &[UtxoId],
    ) -> Result<Vec<Coin>, SelectionError>;

    /// Totals of every asset `owner` holds, ascending by asset id.
    async fn get_balances(&self, owner: &Address) -> Result<Vec<AssetBalance>, SelectionError>;
}

//! # Ledger Account Operations
//!
//! Query and transfer behaviour shared by key-holding and predicate
//! accounts. Implementors supply their address, their provider binding and
//! how they authorize a prepared transaction.

use crate::domain::config::AccountConfig;
use crate::domain::errors::AccountError;
use crate::domain::transaction::{spend_queries, PreparedTransaction, TransferDraft, TxParams, Witness};
use crate::ports::outbound::{Provider, QueryProvider, TransactionHandle, TransactionProvider};
use async_trait::async_trait;
use la_01_address_codec::Address;
use la_03_resource_selection::{
    aggregate_balances, normalize_balances, AssetBalance, Coin, CoinSource, ResourceSelector,
    SpendQuery,
};
use shared_types::{AssetId, UtxoId, U256};
use std::sync::Arc;
use tracing::{debug, info};

/// An address that can query the ledger and move funds.
#[async_trait]
pub trait LedgerAccount: Send + Sync {
    /// Owner of the coins this account spends.
    fn address(&self) -> Address;

    /// Bound provider, if any.
    fn provider(&self) -> Option<&Arc<dyn Provider>>;

    fn config(&self) -> &AccountConfig;

    /// Fails when the account could not authorize a transfer right now.
    ///
    /// Checked before any remote call.
    fn ensure_can_authorize(&self) -> Result<(), AccountError>;

    /// Witness proving this account may spend the prepared inputs.
    fn authorize(&self, prepared: &PreparedTransaction) -> Result<Witness, AccountError>;

    /// Bound provider, or `NoProviderConfigured`.
    fn require_provider(&self) -> Result<&Arc<dyn Provider>, AccountError> {
        self.provider().ok_or(AccountError::NoProviderConfigured)
    }

    /// Unspent coins, optionally of one asset.
    async fn get_coins(&self, asset_id: Option<AssetId>) -> Result<Vec<Coin>, AccountError> {
        let provider = self.require_provider()?;
        Ok(provider.list_coins(&self.address(), asset_id).await?)
    }

    /// Total held of one asset; zero when none.
    async fn get_balance(&self, asset_id: AssetId) -> Result<U256, AccountError> {
        let coins = self.get_coins(Some(asset_id)).await?;
        Ok(aggregate_balances(&coins)
            .into_iter()
            .find(|balance| balance.asset_id == asset_id)
            .map_or_else(U256::zero, |balance| balance.amount))
    }

    /// Totals of every asset held, ascending by asset id.
    async fn get_balances(&self) -> Result<Vec<AssetBalance>, AccountError> {
        let provider = self.require_provider()?;
        let reported = provider.get_balances(&self.address()).await?;
        Ok(normalize_balances(reported))
    }

    /// Coins covering `queries`. See `ResourceSelector::select_resources`.
    async fn get_resources_to_spend(
        &self,
        queries: &[SpendQuery],
        excluded: &[UtxoId],
    ) -> Result<Vec<Coin>, AccountError> {
        let provider = self.require_provider()?;
        let selector = ResourceSelector::with_config(Arc::clone(provider), self.config().selector);
        Ok(selector
            .select_resources(&self.address(), queries, excluded)
            .await?)
    }

    /// Send `amount` of `asset_id` to `destination`.
    ///
    /// Selects inputs (plus `params.fee_reserve` of the base asset), lets the
    /// provider assemble the transaction, attaches this account's witness
    /// and submits.
    ///
    /// # Errors
    /// - `InvalidAmount`: `amount` is zero
    /// - `NoSigningKey`: the account cannot authorize
    /// - `NoProviderConfigured`: no provider bound
    /// - `Selection`: inputs could not be gathered
    /// - `Provider`: assembly or submission failed
    async fn transfer(
        &self,
        destination: &Address,
        amount: U256,
        asset_id: AssetId,
        params: TxParams,
    ) -> Result<Box<dyn TransactionHandle>, AccountError> {
        if amount.is_zero() {
            return Err(AccountError::InvalidAmount);
        }
        self.ensure_can_authorize()?;
        let provider = self.require_provider()?;

        let sender = self.address();
        let queries = spend_queries(asset_id, amount, &params, self.config().base_asset_id);
        let inputs = self.get_resources_to_spend(&queries, &[]).await?;
        debug!(sender = %sender, inputs = inputs.len(), "Transfer inputs selected");

        let draft = TransferDraft {
            sender,
            recipient: *destination,
            asset_id,
            amount,
            inputs,
            params,
        };
        let prepared = provider.assemble(draft).await?;
        let witness = self.authorize(&prepared)?;
        let tx_id = prepared.id;
        let handle = provider.submit(prepared, witness).await?;

        info!(
            tx_id = %tx_id,
            sender = %sender,
            recipient = %destination,
            asset = %asset_id,
            amount = %amount,
            "Transfer submitted"
        );
        Ok(handle)
    }
}

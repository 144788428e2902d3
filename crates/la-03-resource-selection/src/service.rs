//! # Resource Selection Service
//!
//! Binds the pure selection logic to a [`CoinSource`].

use crate::domain::balances::aggregate_balances;
use crate::domain::config::SelectorConfig;
use crate::domain::entities::{AssetBalance, Coin, SpendQuery};
use crate::domain::errors::SelectionError;
use crate::domain::selection::{select_coins, validate_queries};
use crate::ports::inbound::ResourceSelectionApi;
use crate::ports::outbound::CoinSource;
use async_trait::async_trait;
use la_01_address_codec::Address;
use shared_types::UtxoId;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Resource selector over a coin source.
///
/// `S` may be unsized, so an `Arc<dyn Provider>` held by an account can be
/// handed in directly.
pub struct ResourceSelector<S: CoinSource + ?Sized> {
    source: Arc<S>,
    config: SelectorConfig,
}

impl<S: CoinSource + ?Sized> ResourceSelector<S> {
    /// Selector with the default configuration.
    pub fn new(source: Arc<S>) -> Self {
        Self::with_config(source, SelectorConfig::default())
    }

    pub fn with_config(source: Arc<S>, config: SelectorConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// See [`ResourceSelectionApi::select_resources`].
    #[instrument(skip_all, fields(owner = %owner, assets = queries.len()))]
    pub async fn select_resources(
        &self,
        owner: &Address,
        queries: &[SpendQuery],
        excluded: &[UtxoId],
    ) -> Result<Vec<Coin>, SelectionError> {
        validate_queries(queries)?;

        let mut ordered: Vec<&SpendQuery> = queries.iter().collect();
        ordered.sort_by_key(|query| query.asset_id);
        let excluded: HashSet<UtxoId> = excluded.iter().copied().collect();

        let mut selected = Vec::new();
        for query in ordered {
            let candidates = self.source.list_coins(owner, Some(query.asset_id)).await?;
            let candidate_count = candidates.len();
            let coins = select_coins(candidates, query, &excluded).inspect_err(|e| {
                debug!(asset = %query.asset_id, error = %e, "Selection failed");
            })?;
            debug!(
                asset = %query.asset_id,
                candidates = candidate_count,
                selected = coins.len(),
                "Selected coins"
            );
            selected.extend(coins);
        }

        if selected.len() > self.config.max_inputs {
            warn!(
                selected = selected.len(),
                limit = self.config.max_inputs,
                "Selection exceeds input limit"
            );
            return Err(SelectionError::TooManyInputs {
                selected: selected.len(),
                limit: self.config.max_inputs,
            });
        }
        Ok(selected)
    }

    /// See [`ResourceSelectionApi::get_balances`].
    #[instrument(skip_all, fields(owner = %owner))]
    pub async fn get_balances(&self, owner: &Address) -> Result<Vec<AssetBalance>, SelectionError> {
        let coins = self.source.list_coins(owner, None).await?;
        Ok(aggregate_balances(&coins))
    }
}

#[async_trait]
impl<S: CoinSource + ?Sized> ResourceSelectionApi for ResourceSelector<S> {
    async fn select_resources(
        &self,
        owner: &Address,
        queries: &[SpendQuery],
        excluded: &[UtxoId],
    ) -> Result<Vec<Coin>, SelectionError> {
        ResourceSelector::select_resources(self, owner, queries, excluded).await
    }

    async fn get_balances(&self, owner: &Address) -> Result<Vec<AssetBalance>, SelectionError> {
        ResourceSelector::get_balances(self, owner).await
    }
}

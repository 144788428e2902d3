//! # Balance Aggregation
//!
//! Per-asset totals, ascending by asset id. Assets whose total is zero do
//! not appear.

use super::entities::{AssetBalance, Coin};
use shared_types::{AssetId, U256};
use std::collections::BTreeMap;

/// Sum coin amounts per asset.
pub fn aggregate_balances<'a>(coins: impl IntoIterator<Item = &'a Coin>) -> Vec<AssetBalance> {
    collect_totals(coins.into_iter().map(|coin| (coin.asset_id, coin.amount)))
}

/// Bring externally reported balances to the same shape as
/// [`aggregate_balances`]: duplicates merged, zeros dropped, sorted.
pub fn normalize_balances(balances: impl IntoIterator<Item = AssetBalance>) -> Vec<AssetBalance> {
    collect_totals(balances.into_iter().map(|b| (b.asset_id, b.amount)))
}

fn collect_totals(entries: impl Iterator<Item = (AssetId, U256)>) -> Vec<AssetBalance> {
    let mut totals: BTreeMap<AssetId, U256> = BTreeMap::new();
    for (asset_id, amount) in entries {
        let total = totals.entry(asset_id).or_insert_with(U256::zero);
        *total = total.saturating_add(amount);
    }
    totals
        .into_iter()
        .filter(|(_, amount)| !amount.is_zero())
        .map(|(asset_id, amount)| AssetBalance { asset_id, amount })
        .collect()
}

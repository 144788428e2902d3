//! # Coin Selection
//!
//! Largest-first greedy selection. It is a policy, not an optimum: it keeps
//! the input count low and is fully determined by the candidate set.
//!
//! Candidates are ordered by amount descending, ties broken by UTXO id
//! ascending. Coins are taken until the running total reaches the minimum;
//! the coin that crosses the minimum is always kept, so a query's ceiling
//! can only be overshot by that final coin.

use super::entities::{Coin, SpendQuery};
use super::errors::SelectionError;
use shared_types::{AssetId, UtxoId, U256};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Candidate ordering used by [`select_coins`].
pub fn selection_order(a: &Coin, b: &Coin) -> Ordering {
    b.amount.cmp(&a.amount).then_with(|| a.id.cmp(&b.id))
}

/// Reject requests that name an asset twice or carry a ceiling below the
/// minimum.
pub fn validate_queries(queries: &[SpendQuery]) -> Result<(), SelectionError> {
    let mut seen: HashSet<AssetId> = HashSet::with_capacity(queries.len());
    for query in queries {
        if !seen.insert(query.asset_id) {
            return Err(SelectionError::DuplicateAsset(query.asset_id));
        }
        if let Some(max) = query.max {
            if max < query.amount {
                return Err(SelectionError::InvalidQuery {
                    asset: query.asset_id,
                    reason: format!("ceiling {} is below minimum {}", max, query.amount),
                });
            }
        }
    }
    Ok(())
}

/// Select coins of `query.asset_id` from `candidates`.
///
/// Coins of other assets and coins listed in `excluded` are ignored. A zero
/// minimum selects nothing.
///
/// # Errors
/// - `InsufficientFunds`: every eligible coin together falls short
pub fn select_coins(
    candidates: Vec<Coin>,
    query: &SpendQuery,
    excluded: &HashSet<UtxoId>,
) -> Result<Vec<Coin>, SelectionError> {
    let mut eligible: Vec<Coin> = candidates
        .into_iter()
        .filter(|coin| coin.asset_id == query.asset_id && !excluded.contains(&coin.id))
        .collect();
    eligible.sort_by(selection_order);

    let mut total = U256::zero();
    let mut selected = Vec::new();
    for coin in eligible {
        if total >= query.amount {
            break;
        }
        total = total.saturating_add(coin.amount);
        selected.push(coin);
    }

    if total < query.amount {
        return Err(SelectionError::InsufficientFunds {
            asset: query.asset_id,
            required: query.amount,
            available: total,
        });
    }
    Ok(selected)
}

//! # Selection Entities
//!
//! Coins as the ledger reports them, spend requests and per-asset balances.

use la_01_address_codec::Address;
use serde::{Deserialize, Serialize};
use shared_types::{AssetId, UtxoId, U256};
use std::fmt;

/// An unspent output owned by an address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    /// Unique output reference.
    pub id: UtxoId,
    /// Address allowed to spend it.
    pub owner: Address,
    /// Asset denomination.
    pub asset_id: AssetId,
    /// Quantity held.
    pub amount: U256,
    /// Height of the block that created the output.
    pub block_created: u64,
}

impl Coin {
    /// Create a coin created at height zero.
    pub fn new(id: UtxoId, owner: Address, asset_id: AssetId, amount: impl Into<U256>) -> Self {
        Self {
            id,
            owner,
            asset_id,
            amount: amount.into(),
            block_created: 0,
        }
    }

    /// Set the creation height.
    pub fn at_height(mut self, block_created: u64) -> Self {
        self.block_created = block_created;
        self
    }
}

/// Request to fund `amount` of one asset.
///
/// `max` bounds the target: only the coin that crosses `amount` may push the
/// selected total past it. A `max` below `amount` is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendQuery {
    pub asset_id: AssetId,
    pub amount: U256,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<U256>,
}

impl SpendQuery {
    /// Query with no ceiling.
    pub fn new(asset_id: AssetId, amount: impl Into<U256>) -> Self {
        Self {
            asset_id,
            amount: amount.into(),
            max: None,
        }
    }

    /// Attach a ceiling.
    pub fn with_max(mut self, max: impl Into<U256>) -> Self {
        self.max = Some(max.into());
        self
    }
}

/// Total held of one asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetBalance {
    pub asset_id: AssetId,
    pub amount: U256,
}

impl AssetBalance {
    pub fn new(asset_id: AssetId, amount: impl Into<U256>) -> Self {
        Self {
            asset_id,
            amount: amount.into(),
        }
    }
}

impl fmt::Display for AssetBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.amount, self.asset_id)
    }
}

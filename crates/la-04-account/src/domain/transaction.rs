//! # Transfer Transactions
//!
//! An account describes a transfer as a [`TransferDraft`]. The transaction
//! collaborator turns it into a [`PreparedTransaction`], computing the
//! transaction id the ledger will check the witness against. The account
//! then attaches a [`Witness`] and submits.

use la_01_address_codec::Address;
use la_02_signer::CompactSignature;
use la_03_resource_selection::{Coin, SpendQuery};
use serde::{Deserialize, Serialize};
use shared_types::{AssetId, TxId, U256};

/// Fee settings for a transfer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxParams {
    pub gas_price: u64,
    pub gas_limit: u64,
    /// Extra base asset gathered on top of the transferred amount to cover
    /// fees.
    #[serde(default)]
    pub fee_reserve: U256,
}

impl TxParams {
    pub fn with_gas_price(mut self, gas_price: u64) -> Self {
        self.gas_price = gas_price;
        self
    }

    pub fn with_gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = gas_limit;
        self
    }

    pub fn with_fee_reserve(mut self, fee_reserve: impl Into<U256>) -> Self {
        self.fee_reserve = fee_reserve.into();
        self
    }
}

/// Queries that fund a transfer of `amount` of `asset_id`.
///
/// The fee reserve is added to the base asset requirement, merged into the
/// transferred asset's query when they are the same asset.
pub fn spend_queries(
    asset_id: AssetId,
    amount: U256,
    params: &TxParams,
    base_asset_id: AssetId,
) -> Vec<SpendQuery> {
    if asset_id == base_asset_id {
        return vec![SpendQuery::new(
            asset_id,
            amount.saturating_add(params.fee_reserve),
        )];
    }
    let mut queries = vec![SpendQuery::new(asset_id, amount)];
    if !params.fee_reserve.is_zero() {
        queries.push(SpendQuery::new(base_asset_id, params.fee_reserve));
    }
    queries
}

/// Unsigned description of a transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferDraft {
    pub sender: Address,
    pub recipient: Address,
    pub asset_id: AssetId,
    pub amount: U256,
    /// Coins consumed; change goes back to `sender`.
    pub inputs: Vec<Coin>,
    pub params: TxParams,
}

/// A draft with the id the ledger assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreparedTransaction {
    pub id: TxId,
    pub draft: TransferDraft,
}

/// Bytecode and encoded arguments a predicate is evaluated with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredicateWitness {
    pub bytecode: Vec<u8>,
    pub input_data: Vec<u8>,
}

/// Proof of spending authority attached at submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Witness {
    /// Signature over the transaction id by the sender's key.
    Signature(CompactSignature),
    /// Predicate code whose root is the sender's address.
    Predicate(PredicateWitness),
}

/// Final result of an included transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionOutcome {
    pub tx_id: TxId,
    pub block_height: u64,
    pub gas_used: u64,
}

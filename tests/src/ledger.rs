//! # In-Memory Ledger
//!
//! A `Provider` that keeps the UTXO set in memory and enforces what a node
//! would: inputs must exist and belong to the sender, the witness must
//! prove the sender's authority, and the inputs must cover the amount plus
//! the fee. Predicate bytecode is not executed; a predicate witness is
//! accepted when its code hashes to the sender's address.

use async_trait::async_trait;
use la_01_address_codec::Address;
use la_02_signer::recover_address;
use la_03_resource_selection::{AssetBalance, Coin, CoinSource, ProviderError};
use la_04_account::{
    PreparedTransaction, QueryProvider, TransactionHandle, TransactionOutcome,
    TransactionProvider, TransferDraft, Witness,
};
use la_05_predicate::predicate_address;
use shared_crypto::Sha256Hasher;
use shared_types::{AssetId, TxId, UtxoId, BASE_ASSET_ID, U256};
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;
use tracing::debug;

/// Gas charged for every transfer.
pub const TRANSFER_GAS: u64 = 10;

#[derive(Default)]
struct LedgerState {
    coins: BTreeMap<UtxoId, Coin>,
    height: u64,
    nonce: u64,
    submissions: Vec<(PreparedTransaction, Witness)>,
}

/// In-memory UTXO ledger.
#[derive(Default)]
pub struct InMemoryLedger {
    state: RwLock<LedgerState>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a coin for `owner`.
    pub async fn fund(&self, owner: Address, asset_id: AssetId, amount: u64) -> Coin {
        let mut state = self.state.write().await;
        state.nonce += 1;
        let nonce = state.nonce.to_be_bytes();
        let mint_id = TxId::new(digest(&[b"mint".as_slice(), nonce.as_slice()]));
        let coin = Coin::new(UtxoId::new(mint_id, 0), owner, asset_id, amount)
            .at_height(state.height);
        state.coins.insert(coin.id, coin.clone());
        coin
    }

    /// Every transaction accepted so far, in order.
    pub async fn submissions(&self) -> Vec<(PreparedTransaction, Witness)> {
        self.state.read().await.submissions.clone()
    }

    pub async fn height(&self) -> u64 {
        self.state.read().await.height
    }
}

fn digest(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha256Hasher::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize()
}

fn u256_bytes(value: U256) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    value.to_big_endian(&mut bytes);
    bytes
}

fn authorizes(witness: &Witness, prepared: &PreparedTransaction) -> bool {
    let sender = prepared.draft.sender;
    match witness {
        Witness::Signature(signature) => {
            recover_address(prepared.id.as_bytes(), signature).is_ok_and(|signer| signer == sender)
        }
        Witness::Predicate(predicate) => predicate_address(&predicate.bytecode) == sender,
    }
}

#[async_trait]
impl CoinSource for InMemoryLedger {
    async fn list_coins(
        &self,
        owner: &Address,
        asset_id: Option<AssetId>,
    ) -> Result<Vec<Coin>, ProviderError> {
        let state = self.state.read().await;
        Ok(state
            .coins
            .values()
            .filter(|coin| coin.owner == *owner && asset_id.map_or(true, |a| coin.asset_id == a))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl QueryProvider for InMemoryLedger {
    /// One entry per coin, newest first, the way a paginated node answer
    /// arrives before the account normalizes it.
    async fn get_balances(&self, owner: &Address) -> Result<Vec<AssetBalance>, ProviderError> {
        let state = self.state.read().await;
        Ok(state
            .coins
            .values()
            .rev()
            .filter(|coin| coin.owner == *owner)
            .map(|coin| AssetBalance::new(coin.asset_id, coin.amount))
            .collect())
    }
}

#[async_trait]
impl TransactionProvider for InMemoryLedger {
    async fn assemble(&self, draft: TransferDraft) -> Result<PreparedTransaction, ProviderError> {
        let mut state = self.state.write().await;
        state.nonce += 1;

        let mut hasher = Sha256Hasher::new();
        hasher
            .update(draft.sender)
            .update(draft.recipient)
            .update(draft.asset_id.as_bytes())
            .update(u256_bytes(draft.amount))
            .update(draft.params.gas_price.to_be_bytes())
            .update(draft.params.gas_limit.to_be_bytes())
            .update(state.nonce.to_be_bytes());
        for input in &draft.inputs {
            hasher
                .update(input.id.tx_id.as_bytes())
                .update(input.id.output_index.to_be_bytes());
        }

        Ok(PreparedTransaction {
            id: TxId::new(hasher.finalize()),
            draft,
        })
    }

    async fn submit(
        &self,
        prepared: PreparedTransaction,
        witness: Witness,
    ) -> Result<Box<dyn TransactionHandle>, ProviderError> {
        let mut state = self.state.write().await;
        let draft = &prepared.draft;

        for input in &draft.inputs {
            match state.coins.get(&input.id) {
                Some(coin) if coin.owner == draft.sender => {}
                _ => {
                    return Err(ProviderError::Rejected(format!(
                        "input {} is spent or not owned by sender",
                        input.id
                    )))
                }
            }
        }
        if !authorizes(&witness, &prepared) {
            return Err(ProviderError::Rejected("witness does not authorize sender".into()));
        }
        if draft.params.gas_limit < TRANSFER_GAS {
            return Err(ProviderError::Rejected("gas limit too low".into()));
        }

        let fee = U256::from(draft.params.gas_price) * U256::from(TRANSFER_GAS);
        let mut totals: HashMap<AssetId, U256> = HashMap::new();
        for input in &draft.inputs {
            *totals.entry(input.asset_id).or_insert_with(U256::zero) += input.amount;
        }
        let mut required: HashMap<AssetId, U256> = HashMap::new();
        *required.entry(draft.asset_id).or_insert_with(U256::zero) += draft.amount;
        *required.entry(BASE_ASSET_ID).or_insert_with(U256::zero) += fee;
        for (asset, needed) in &required {
            let available = totals.get(asset).copied().unwrap_or_default();
            if available < *needed {
                return Err(ProviderError::Rejected(format!(
                    "inputs of {asset} cover {available}, need {needed}"
                )));
            }
        }

        for input in &draft.inputs {
            state.coins.remove(&input.id);
        }
        state.height += 1;
        let height = state.height;

        let mut outputs = vec![(draft.recipient, draft.asset_id, draft.amount)];
        let mut change: Vec<(AssetId, U256)> = totals
            .into_iter()
            .map(|(asset, total)| (asset, total - required.get(&asset).copied().unwrap_or_default()))
            .filter(|(_, amount)| !amount.is_zero())
            .collect();
        change.sort_by_key(|(asset, _)| *asset);
        outputs.extend(change.into_iter().map(|(asset, amount)| (draft.sender, asset, amount)));

        for (index, (owner, asset, amount)) in outputs.into_iter().enumerate() {
            let id = UtxoId::new(prepared.id, index as u16);
            let coin = Coin {
                id,
                owner,
                asset_id: asset,
                amount,
                block_created: height,
            };
            state.coins.insert(id, coin);
        }

        debug!(tx_id = %prepared.id, height, "Ledger accepted transaction");
        let tx_id = prepared.id;
        state.submissions.push((prepared, witness));

        Ok(Box::new(LedgerHandle {
            outcome: TransactionOutcome {
                tx_id,
                block_height: height,
                gas_used: TRANSFER_GAS,
            },
        }))
    }
}

/// Handle for an already-included transaction.
struct LedgerHandle {
    outcome: TransactionOutcome,
}

#[async_trait]
impl TransactionHandle for LedgerHandle {
    fn id(&self) -> TxId {
        self.outcome.tx_id
    }

    async fn wait_for_result(&self) -> Result<TransactionOutcome, ProviderError> {
        Ok(self.outcome.clone())
    }
}

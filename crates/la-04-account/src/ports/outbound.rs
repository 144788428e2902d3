//! Outbound (Driven) ports for the Account subsystem.
//!
//! A provider is any type implementing both [`QueryProvider`] and
//! [`TransactionProvider`]; accounts hold it as `Arc<dyn Provider>`.

use crate::domain::transaction::{PreparedTransaction, TransactionOutcome, TransferDraft, Witness};
use async_trait::async_trait;
use la_01_address_codec::Address;
use la_03_resource_selection::{AssetBalance, CoinSource, ProviderError};
use shared_types::TxId;

/// Read access to ledger state.
#[async_trait]
pub trait QueryProvider: CoinSource {
    /// Balances reported by the node for `owner`.
    ///
    /// Callers normalize the answer; order and zero entries are not
    /// guaranteed.
    async fn get_balances(&self, owner: &Address) -> Result<Vec<AssetBalance>, ProviderError>;
}

/// Transaction assembly and submission.
#[async_trait]
pub trait TransactionProvider: Send + Sync {
    /// Fix outputs and compute the transaction id.
    async fn assemble(&self, draft: TransferDraft) -> Result<PreparedTransaction, ProviderError>;

    /// Submit with a witness; returns a handle to await inclusion.
    ///
    /// # Errors
    /// - `Rejected`: the witness does not authorize the inputs, or an input
    ///   is already spent
    async fn submit(
        &self,
        prepared: PreparedTransaction,
        witness: Witness,
    ) -> Result<Box<dyn TransactionHandle>, ProviderError>;
}

/// A submitted transaction.
#[async_trait]
pub trait TransactionHandle: Send + Sync {
    fn id(&self) -> TxId;

    /// Wait until the transaction is included.
    ///
    /// # Errors
    /// - `Reverted`: included but failed
    async fn wait_for_result(&self) -> Result<TransactionOutcome, ProviderError>;
}

/// Full ledger provider.
pub trait Provider: QueryProvider + TransactionProvider {}

impl<T: QueryProvider + TransactionProvider + ?Sized> Provider for T {}

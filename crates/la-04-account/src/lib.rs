//! # Account Subsystem (LA-04)
//!
//! An address optionally paired with its signing key and optionally bound to
//! a ledger provider.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): errors, configuration, transaction drafts
//!   and witnesses
//! - **Ports Layer** (`ports/`): `QueryProvider`, `TransactionProvider`,
//!   `TransactionHandle` and the combined `Provider`
//! - **`LedgerAccount`** (`ledger.rs`): balance, coin and transfer operations
//!   shared by every account kind
//! - **`Account`** (`account.rs`): key-holding account
//!
//! ## Locking
//!
//! A locked account knows only its address; it can query but not sign.
//! `lock` drops the key, and the key material is wiped on drop. Every
//! provider-backed operation fails with `NoProviderConfigured` before any
//! remote call when no provider is bound.

pub mod account;
pub mod domain;
pub mod ledger;
pub mod ports;

// Re-exports for convenience
pub use account::Account;
pub use domain::config::AccountConfig;
pub use domain::errors::AccountError;
pub use domain::transaction::{
    spend_queries, PredicateWitness, PreparedTransaction, TransactionOutcome, TransferDraft,
    TxParams, Witness,
};
pub use ledger::LedgerAccount;
pub use ports::outbound::{Provider, QueryProvider, TransactionHandle, TransactionProvider};

pub use la_03_resource_selection::{
    AssetBalance, Coin, CoinSource, ProviderError, SelectionError, SelectorConfig, SpendQuery,
};

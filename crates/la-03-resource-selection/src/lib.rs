//! # Resource Selection Subsystem (LA-03)
//!
//! Chooses the coins that fund a spend and aggregates balances per asset.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): pure selection and aggregation, no I/O
//!   - `Coin`, `SpendQuery`, `AssetBalance`
//!   - `select_coins`: largest-first greedy selection for one asset
//!   - `aggregate_balances`: per-asset totals, ascending by asset id
//!   - `SelectorConfig` / `SelectorConfigBuilder`
//!
//! - **Ports Layer** (`ports/`):
//!   - `ResourceSelectionApi`: driving port
//!   - `CoinSource`: driven port, the coin-listing collaborator
//!
//! - **Service Layer** (`service.rs`): `ResourceSelector` wires the two
//!
//! ## Invariants
//!
//! - **Sufficiency**: a successful selection always sums to at least the
//!   requested minimum per asset; otherwise `InsufficientFunds`.
//! - **Determinism**: an unchanged coin set always yields the same
//!   selection (amount descending, then UTXO id ascending).
//! - **Snapshot**: nothing is reserved between calls. Two concurrent
//!   selections may pick the same coin; the ledger rejects the loser.

pub mod domain;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use domain::balances::{aggregate_balances, normalize_balances};
pub use domain::config::{SelectorConfig, SelectorConfigBuilder, DEFAULT_MAX_INPUTS};
pub use domain::entities::{AssetBalance, Coin, SpendQuery};
pub use domain::errors::SelectionError;
pub use domain::selection::{select_coins, validate_queries};
pub use ports::inbound::ResourceSelectionApi;
pub use ports::outbound::{CoinSource, ProviderError};
pub use service::ResourceSelector;

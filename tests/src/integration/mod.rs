//! # Integration Flows
//!
//! End-to-end scenarios across the codec, signer, selector, account and
//! predicate crates, run against [`crate::ledger::InMemoryLedger`].

pub mod address_flows;
pub mod predicate_flows;
pub mod wallet_flows;

//! # Predicate Subsystem (LA-05)
//!
//! A predicate account has no key. Its address is derived from its
//! bytecode, and the ledger lets it spend whenever that bytecode evaluates
//! to true against the transaction and the supplied input data.
//!
//! ## Components
//!
//! - `bytecode`: Merkle root of the code and the address derived from it,
//!   plus configurable patches applied before hashing
//! - `arguments`: `PredicateArgument` and its word-aligned encoding
//! - `abi`: JSON ABI model used to check input data against `main`
//! - `PredicateAccount`: `LedgerAccount` implementation that authorizes
//!   transfers with a `PredicateWitness`
//!
//! Evaluation happens on the ledger; nothing here runs the bytecode.

pub mod domain;
pub mod predicate;

// Re-exports for convenience
pub use domain::abi::{AbiConfigurable, AbiFunction, AbiType, AbiTypeApplication, PredicateAbi};
pub use domain::arguments::{encode_arguments, PredicateArgument, WORD_SIZE};
pub use domain::bytecode::{
    apply_configurables, bytecode_root, predicate_address, ConfigurablePatch, BYTECODE_CHUNK_SIZE,
};
pub use domain::errors::PredicateError;
pub use predicate::PredicateAccount;

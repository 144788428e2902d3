//! # Signer Subsystem (LA-02)
//!
//! Message signing and signer recovery for ledger accounts.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): pure functions, no I/O
//!   - `message`: domain-separated message digests
//!   - `signature`: 64-byte compact recoverable signature encoding
//!   - `recovery`: public-key and address recovery, signer checks
//! - **Signer** (`signer.rs`): a keypair bound to its address
//!
//! ## Security Notes
//!
//! - Message digests carry a fixed domain tag so they can never collide with
//!   transaction-id digests.
//! - Recovery is NOT authentication. A well-formed signature always recovers
//!   *some* address; only [`verify_signer`] compares it with the expected one.

pub mod domain;
pub mod signer;

// Re-export public API
pub use domain::errors::SignerError;
pub use domain::message::{hash_message, hash_message_bytes, MESSAGE_DOMAIN_TAG};
pub use domain::recovery::{recover_address, recover_public_key, verify_signer};
pub use domain::signature::{CompactSignature, COMPACT_SIGNATURE_LEN};
pub use signer::{sign, Signer};

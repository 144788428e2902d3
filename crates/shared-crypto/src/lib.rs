//! # Shared Crypto - Cryptographic Primitives
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | SHA-256 | Address derivation, message digests, predicate roots |
//! | `ecdsa` | secp256k1 | Account keys, recoverable signatures |
//!
//! ## Security Properties
//!
//! - **secp256k1**: RFC 6979 deterministic nonces, low-S normalization
//! - **Secrets**: scalars are held in zeroizing containers and wiped on drop,
//!   including on parse-error paths

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ecdsa;
pub mod errors;
pub mod hashing;

// Re-exports
pub use ecdsa::{RecoverableSignature, Secp256k1KeyPair, Secp256k1PublicKey, SecretKey};
pub use errors::CryptoError;
pub use hashing::{sha256, sha256_many, Sha256Hasher};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! # Address Codec Subsystem (LA-01)
//!
//! Canonical 256-bit account and predicate identifiers.
//!
//! ## Architecture
//!
//! Pure domain logic, no I/O:
//! - `domain/address.rs`: `Address` and its three projections (bytes, hex, Bech32m)
//! - `domain/input.rs`: `AddressInput`, the tagged union for inputs of unknown form
//! - `domain/errors.rs`: `AddressError`
//!
//! ## Encodings
//!
//! | Form | Example |
//! |------|---------|
//! | hex | `0xf1e92c42b90934aa6372e30bc568a326f6e66a1a0288595e6e3fbd392a4f3e6e` |
//! | checksummed | `fuel1785jcs4epy625cmjuv9u269rymmwv6s6q2y9jhnw877nj2j08ehqce3rxf` |
//!
//! Both forms decode to the same 32 bytes, and equality is defined over
//! those bytes only.

pub mod domain;

// Re-export public API
pub use domain::address::{Address, ADDRESS_HRP, ADDRESS_LEN};
pub use domain::errors::AddressError;
pub use domain::input::AddressInput;

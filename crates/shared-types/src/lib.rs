//! # Shared Types Crate
//!
//! Primitive identifiers used across the ledger-account subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every 256-bit identifier that is not an
//!   `Address` is defined here.
//! - **Value Semantics**: identifiers compare by their raw bytes, never by
//!   their textual form.
//! - **No Magic Literals**: the base asset is the named constant
//!   [`BASE_ASSET_ID`].

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;

//! # la-keytool
//!
//! Offline key and address utilities. Every command is a pure function
//! returning a serializable report; `main.rs` only parses arguments and
//! prints.

pub mod commands;

pub use commands::{
    convert, from_public_key, generate, predicate, recover, sign, AddressReport, KeyReport,
    SignatureReport,
};

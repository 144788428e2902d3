//! # Domain Layer
//!
//! Pure bytecode hashing, argument encoding and ABI checks.

pub mod abi;
pub mod arguments;
pub mod bytecode;
pub mod errors;

//! # Domain Layer
//!
//! Pure cryptographic logic with no I/O dependencies.

pub mod errors;
pub mod message;
pub mod recovery;
pub mod signature;

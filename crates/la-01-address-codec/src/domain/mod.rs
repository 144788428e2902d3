//! # Domain Layer
//!
//! Address value type and its parsers. No I/O dependencies.

pub mod address;
pub mod errors;
pub mod input;

//! # Domain Layer
//!
//! Pure selection logic with no I/O dependencies.

pub mod balances;
pub mod config;
pub mod entities;
pub mod errors;
pub mod selection;

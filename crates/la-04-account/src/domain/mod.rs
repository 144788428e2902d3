//! # Domain Layer

pub mod config;
pub mod errors;
pub mod transaction;

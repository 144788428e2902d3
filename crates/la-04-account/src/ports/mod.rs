//! # Ports Layer
//!
//! Ledger collaborators an account depends on.

pub mod outbound;

//! # Ledger Account Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── ledger.rs         # In-memory ledger implementing every provider port
//! └── integration/      # Cross-crate flows
//!     ├── address_flows.rs
//!     ├── wallet_flows.rs
//!     └── predicate_flows.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p la-tests
//!
//! # By category
//! cargo test -p la-tests integration::wallet_flows
//!
//! # Benchmarks
//! cargo bench -p la-tests
//! ```

pub mod integration;
pub mod ledger;

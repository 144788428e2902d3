//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: API that accounts use
//! - **Outbound (Driven)**: the coin-listing collaborator

pub mod inbound;
pub mod outbound;

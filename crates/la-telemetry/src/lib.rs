//! # Ledger-Account Telemetry
//!
//! Installs the global `tracing` subscriber for binaries built on the
//! ledger-account crates. Libraries only emit events; they never install a
//! subscriber themselves.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use la_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_telemetry(&TelemetryConfig::from_env())?;
//!     // ...
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `LA_LOG_LEVEL` / `RUST_LOG` | `info` | Filter directives |
//! | `LA_JSON_LOGS` | `false` | JSON lines instead of human output |
//! | `LA_CONSOLE_OUTPUT` | `true` | Write events to stderr at all |
//! | `LA_SERVICE_NAME` | `ledger-account` | Recorded on the startup event |

mod config;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use tracing_setup::{build_filter, init_telemetry};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter `{directives}`: {reason}")]
    InvalidFilter { directives: String, reason: String },

    #[error("Failed to install subscriber: {0}")]
    SubscriberInit(String),
}

//! la-keytool: key, address and signature utility.

use anyhow::Result;
use clap::{Parser, Subcommand};
use la_keytool::commands;
use la_telemetry::{init_telemetry, TelemetryConfig};
use serde::Serialize;
use std::fmt::Display;

/// Offline utility for ledger account keys and addresses
#[derive(Parser, Debug)]
#[command(name = "la-keytool", version)]
#[command(about = "Generate keys, convert addresses, sign and recover messages")]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a random key
    Generate,
    /// Print an address (hex or bech32) in both forms
    Convert { address: String },
    /// Derive the address of an uncompressed public key
    FromPublicKey { public_key: String },
    /// Sign a message
    Sign {
        /// Hex private key
        #[arg(long)]
        key: String,
        message: String,
    },
    /// Recover the signer of a message
    Recover { message: String, signature: String },
    /// Derive the address of predicate bytecode (hex)
    Predicate { bytecode: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = TelemetryConfig::from_env();
    if std::env::var_os("LA_LOG_LEVEL").is_none() && std::env::var_os("RUST_LOG").is_none() {
        config = config.with_log_level("warn");
    }
    init_telemetry(&config)?;

    match cli.command {
        Command::Generate => print(&commands::generate()?, cli.json),
        Command::Convert { address } => print(&commands::convert(&address)?, cli.json),
        Command::FromPublicKey { public_key } => {
            print(&commands::from_public_key(&public_key)?, cli.json)
        }
        Command::Sign { key, message } => print(&commands::sign(&key, &message)?, cli.json),
        Command::Recover { message, signature } => {
            print(&commands::recover(&message, &signature)?, cli.json)
        }
        Command::Predicate { bytecode } => print(&commands::predicate(&bytecode)?, cli.json),
    }
}

fn print<T: Serialize + Display>(report: &T, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}

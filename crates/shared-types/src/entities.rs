//! # Core Primitive Entities
//!
//! 32-byte identifiers and amounts used by the codec, selector and account
//! subsystems.
//!
//! ## Types
//!
//! - **Raw**: `Bytes32`
//! - **Identifiers**: `AssetId`, `TxId`, `UtxoId`
//! - **Amounts**: `U256`

use crate::errors::ParseBytesError;
use rand::RngCore;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// Re-export U256 from primitive-types for use across all subsystems
pub use primitive_types::U256;

/// Length in bytes of every 256-bit identifier.
pub const BYTES32_LEN: usize = 32;

/// A 32-byte hash (SHA-256 output).
pub type Hash = [u8; 32];

/// Decode `0x`-prefixed (or bare) hex into exactly 32 bytes.
pub fn decode_hex32(text: &str) -> Result<[u8; 32], ParseBytesError> {
    let stripped = strip_hex_prefix(text);
    let decoded = hex::decode(stripped).map_err(|e| ParseBytesError::InvalidHex(e.to_string()))?;
    if decoded.len() != BYTES32_LEN {
        return Err(ParseBytesError::InvalidLength {
            expected: BYTES32_LEN,
            actual: decoded.len(),
        });
    }
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&decoded);
    Ok(bytes)
}

/// Strip a leading `0x` / `0X` if present.
pub fn strip_hex_prefix(text: &str) -> &str {
    text.strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text)
}

/// Raw 256-bit value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Bytes32([u8; 32]);

impl Bytes32 {
    /// All-zero value.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Wrap raw bytes.
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Random value from the thread RNG.
    pub fn random() -> Self {
        Self::random_with(&mut rand::thread_rng())
    }

    /// Random value from a caller-supplied RNG.
    pub fn random_with<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Borrow the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Copy out the raw bytes.
    pub const fn to_bytes(self) -> [u8; 32] {
        self.0
    }

    /// `0x` + 64 lowercase hex characters.
    pub fn to_hex_string(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl From<[u8; 32]> for Bytes32 {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl From<Bytes32> for [u8; 32] {
    fn from(value: Bytes32) -> Self {
        value.0
    }
}

impl AsRef<[u8]> for Bytes32 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Bytes32 {
    type Err = ParseBytesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_hex32(s).map(Self)
    }
}

impl fmt::Display for Bytes32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Bytes32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl Serialize for Bytes32 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for Bytes32 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Declares a 32-byte identifier newtype over [`Bytes32`].
macro_rules! bytes32_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Bytes32);

        impl $name {
            /// All-zero identifier.
            pub const ZERO: Self = Self(Bytes32::ZERO);

            /// Wrap raw bytes.
            pub const fn new(bytes: [u8; 32]) -> Self {
                Self(Bytes32::new(bytes))
            }

            /// Random identifier (tests and fixtures).
            pub fn random() -> Self {
                Self(Bytes32::random())
            }

            /// Borrow the raw bytes.
            pub const fn as_bytes(&self) -> &[u8; 32] {
                self.0.as_bytes()
            }

            /// `0x` + 64 lowercase hex characters.
            pub fn to_hex_string(&self) -> String {
                self.0.to_hex_string()
            }
        }

        impl From<[u8; 32]> for $name {
            fn from(bytes: [u8; 32]) -> Self {
                Self::new(bytes)
            }
        }

        impl From<Bytes32> for $name {
            fn from(value: Bytes32) -> Self {
                Self(value)
            }
        }

        impl FromStr for $name {
            type Err = ParseBytesError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

bytes32_newtype!(
    /// 256-bit identifier of a fungible asset type.
    AssetId
);

bytes32_newtype!(
    /// Identifier of a ledger transaction.
    TxId
);

/// The ledger's native asset. Used as the default asset for balance queries
/// and fee reservation.
pub const BASE_ASSET_ID: AssetId = AssetId::ZERO;

/// Pointer to a transaction output: the coin's ledger identity.
///
/// Ordered by transaction id then output index, which gives resource
/// selection a stable tie-breaker between equal amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UtxoId {
    /// Transaction that created the output.
    pub tx_id: TxId,
    /// Index of the output in that transaction.
    pub output_index: u16,
}

impl UtxoId {
    /// Create a new UTXO pointer.
    pub const fn new(tx_id: TxId, output_index: u16) -> Self {
        Self {
            tx_id,
            output_index,
        }
    }
}

impl fmt::Display for UtxoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04x}", self.tx_id, self.output_index)
    }
}

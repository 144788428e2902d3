//! # Compact Signatures
//!
//! 64 bytes: `r || s` with the recovery parity folded into the top bit of
//! `s`. Signing always produces low-S values, so that bit is otherwise zero.

use super::errors::SignerError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use shared_crypto::RecoverableSignature;
use std::fmt;

/// Length of a compact signature in bytes.
pub const COMPACT_SIGNATURE_LEN: usize = 64;

const PARITY_BYTE: usize = 32;
const PARITY_MASK: u8 = 0x80;

/// Recoverable signature in its 64-byte wire form.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompactSignature([u8; 64]);

impl CompactSignature {
    /// Wrap 64 bytes without validation. Malformed values are caught at
    /// recovery time.
    pub const fn from_array(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    /// Wrap a slice that must be exactly 64 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SignerError> {
        let raw: [u8; 64] = bytes.try_into().map_err(|_| {
            SignerError::InvalidSignature(format!(
                "expected {COMPACT_SIGNATURE_LEN} bytes, got {}",
                bytes.len()
            ))
        })?;
        Ok(Self(raw))
    }

    /// Parse `0x`-prefixed (or bare) hex.
    pub fn from_hex(text: &str) -> Result<Self, SignerError> {
        let stripped = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .unwrap_or(text);
        let bytes =
            hex::decode(stripped).map_err(|e| SignerError::InvalidSignature(e.to_string()))?;
        Self::from_slice(&bytes)
    }

    /// Borrow the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    /// `0x` + 128 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Split into `r || s` and the parity bit.
    pub fn to_recoverable(&self) -> RecoverableSignature {
        let mut rs = self.0;
        let y_odd = rs[PARITY_BYTE] & PARITY_MASK != 0;
        rs[PARITY_BYTE] &= !PARITY_MASK;
        RecoverableSignature { rs, y_odd }
    }
}

impl From<RecoverableSignature> for CompactSignature {
    fn from(signature: RecoverableSignature) -> Self {
        let mut bytes = signature.rs;
        if signature.y_odd {
            bytes[PARITY_BYTE] |= PARITY_MASK;
        }
        Self(bytes)
    }
}

impl fmt::Display for CompactSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for CompactSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompactSignature({})", self.to_hex())
    }
}

impl Serialize for CompactSignature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for CompactSignature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_hex(&text).map_err(serde::de::Error::custom)
    }
}

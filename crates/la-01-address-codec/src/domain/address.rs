//! # Address
//!
//! A 32-byte identifier with two lossless textual projections:
//!
//! - **hex**: `0x` + 64 lowercase hex characters, big-endian
//! - **checksummed**: Bech32m with the human-readable part [`ADDRESS_HRP`]
//!
//! Addresses of accounts are SHA-256 of the 64-byte uncompressed public key.
//! Predicate addresses are derived elsewhere from bytecode and wrapped here
//! with [`Address::from_raw_bytes`].

use super::errors::AddressError;
use super::input::AddressInput;
use bech32::{FromBase32, ToBase32, Variant};
use rand::RngCore;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use shared_crypto::{sha256, Secp256k1PublicKey};
use shared_types::{strip_hex_prefix, Bytes32};
use std::fmt;
use std::str::FromStr;

/// Human-readable prefix of checksummed addresses.
pub const ADDRESS_HRP: &str = "fuel";

/// Raw address length in bytes.
pub const ADDRESS_LEN: usize = 32;

const UNCOMPRESSED_KEY_LEN: usize = 64;
const SEC1_UNCOMPRESSED_KEY_LEN: usize = 65;
const SEC1_UNCOMPRESSED_TAG: u8 = 0x04;

/// 256-bit account or predicate identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Address([u8; 32]);

impl Address {
    /// The all-zero address.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Wrap 32 raw bytes.
    pub const fn from_raw_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Wrap a byte slice that must be exactly 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, AddressError> {
        let raw: [u8; 32] = bytes
            .try_into()
            .map_err(|_| AddressError::InvalidLength {
                expected: ADDRESS_LEN,
                actual: bytes.len(),
            })?;
        Ok(Self(raw))
    }

    /// Parse `0x`-prefixed (or bare) hex. Upper-case digits are accepted.
    pub fn from_hex_string(text: &str) -> Result<Self, AddressError> {
        let stripped = strip_hex_prefix(text);
        if !stripped.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(AddressError::InvalidEncoding(format!(
                "not a hex string: {text}"
            )));
        }
        if stripped.len() % 2 != 0 {
            return Err(AddressError::InvalidEncoding(format!(
                "odd number of hex digits: {}",
                stripped.len()
            )));
        }
        if stripped.len() != ADDRESS_LEN * 2 {
            return Err(AddressError::InvalidLength {
                expected: ADDRESS_LEN,
                actual: stripped.len() / 2,
            });
        }
        let mut raw = [0u8; 32];
        hex::decode_to_slice(stripped, &mut raw)
            .map_err(|e| AddressError::InvalidEncoding(e.to_string()))?;
        Ok(Self(raw))
    }

    /// Parse a Bech32m string with the [`ADDRESS_HRP`] prefix.
    pub fn from_checksummed_string(text: &str) -> Result<Self, AddressError> {
        let (hrp, data, variant) =
            bech32::decode(text).map_err(|e| AddressError::InvalidEncoding(e.to_string()))?;
        if hrp != ADDRESS_HRP {
            return Err(AddressError::InvalidEncoding(format!(
                "unexpected prefix '{hrp}', expected '{ADDRESS_HRP}'"
            )));
        }
        if variant != Variant::Bech32m {
            return Err(AddressError::InvalidEncoding(
                "checksum is bech32, expected bech32m".to_string(),
            ));
        }
        let bytes =
            Vec::<u8>::from_base32(&data).map_err(|e| AddressError::InvalidEncoding(e.to_string()))?;
        if bytes.len() != ADDRESS_LEN {
            return Err(AddressError::InvalidEncoding(format!(
                "payload is {} bytes, expected {ADDRESS_LEN}",
                bytes.len()
            )));
        }
        Self::from_slice(&bytes)
    }

    /// Derive an address from an uncompressed secp256k1 public key.
    ///
    /// Accepts the 64-byte `x || y` form or the 65-byte SEC1 form with the
    /// `0x04` tag. The point itself is not validated; derivation is a plain
    /// one-way hash.
    pub fn from_public_key(public_key: &[u8]) -> Result<Self, AddressError> {
        let key = match public_key.len() {
            UNCOMPRESSED_KEY_LEN => public_key,
            SEC1_UNCOMPRESSED_KEY_LEN if public_key[0] == SEC1_UNCOMPRESSED_TAG => &public_key[1..],
            length => return Err(AddressError::InvalidPublicKey { length }),
        };
        Ok(Self(sha256(key)))
    }

    /// Derive an address from a hex-encoded public key.
    pub fn from_public_key_hex(text: &str) -> Result<Self, AddressError> {
        let bytes = hex::decode(strip_hex_prefix(text))
            .map_err(|e| AddressError::InvalidEncoding(e.to_string()))?;
        Self::from_public_key(&bytes)
    }

    /// Derive an address from a validated secp256k1 public key.
    pub fn from_secp256k1(public_key: &Secp256k1PublicKey) -> Self {
        Self(sha256(public_key.as_bytes()))
    }

    /// Parse text of unknown form: hex first, then checksummed.
    ///
    /// Hex is always attempted first. Reordering would let a malformed hex
    /// string be read as something else.
    pub fn from_ambiguous_string(text: &str) -> Result<Self, AddressError> {
        Self::from_hex_string(text)
            .or_else(|_| Self::from_checksummed_string(text))
            .map_err(|_| AddressError::UnresolvableAddress(text.to_string()))
    }

    /// Resolve an explicitly tagged input.
    pub fn from_dynamic_input<'a>(input: impl Into<AddressInput<'a>>) -> Result<Self, AddressError> {
        match input.into() {
            AddressInput::Address(address) => Ok(address),
            AddressInput::Bytes(bytes) => Self::from_slice(bytes),
            AddressInput::PublicKey(key) => Self::from_public_key(key),
            AddressInput::Text(text) => Self::from_ambiguous_string(text),
        }
    }

    /// Random address from the thread RNG. Useful for fixtures.
    pub fn random() -> Self {
        Self::random_with(&mut rand::thread_rng())
    }

    /// Random address from a caller-supplied RNG.
    pub fn random_with<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut raw = [0u8; 32];
        rng.fill_bytes(&mut raw);
        Self(raw)
    }

    /// Bech32m projection.
    pub fn to_checksummed_string(&self) -> String {
        self.to_string()
    }

    /// `0x` + 64 lowercase hex characters.
    pub fn to_hex_string(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Copy out the raw bytes.
    pub const fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Borrow the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl From<[u8; 32]> for Address {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl From<Bytes32> for Address {
    fn from(value: Bytes32) -> Self {
        Self(value.to_bytes())
    }
}

impl From<Address> for Bytes32 {
    fn from(address: Address) -> Self {
        Bytes32::new(address.0)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match bech32::encode_to_fmt(f, ADDRESS_HRP, self.0.to_base32(), Variant::Bech32m) {
            Ok(result) => result,
            Err(_) => Err(fmt::Error),
        }
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex_string())
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_ambiguous_string(s)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_ambiguous_string(&text).map_err(serde::de::Error::custom)
    }
}

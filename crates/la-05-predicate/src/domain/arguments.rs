//! # Predicate Arguments
//!
//! Values passed to a predicate's `main`, encoded big-endian and padded to
//! whole 8-byte words. Arrays are their elements back to back.

use la_02_signer::CompactSignature;
use serde::{Deserialize, Serialize};
use std::fmt;

/// VM word size in bytes.
pub const WORD_SIZE: usize = 8;

/// One argument value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PredicateArgument {
    Bool(bool),
    U64(u64),
    B256([u8; 32]),
    #[serde(with = "b512_hex")]
    B512([u8; 64]),
    Array(Vec<PredicateArgument>),
}

impl PredicateArgument {
    /// Append the encoding to `out`.
    pub fn encode_into(&self, out: &mut Vec<u8>) {
        match self {
            Self::Bool(value) => out.extend_from_slice(&u64::from(*value).to_be_bytes()),
            Self::U64(value) => out.extend_from_slice(&value.to_be_bytes()),
            Self::B256(bytes) => out.extend_from_slice(bytes),
            Self::B512(bytes) => out.extend_from_slice(bytes),
            Self::Array(items) => items.iter().for_each(|item| item.encode_into(out)),
        }
    }

    /// Short type name for error messages.
    pub fn kind(&self) -> String {
        match self {
            Self::Bool(_) => "bool".to_string(),
            Self::U64(_) => "u64".to_string(),
            Self::B256(_) => "b256".to_string(),
            Self::B512(_) => "B512".to_string(),
            Self::Array(items) => format!("array of {}", items.len()),
        }
    }
}

impl From<CompactSignature> for PredicateArgument {
    fn from(signature: CompactSignature) -> Self {
        Self::B512(*signature.as_bytes())
    }
}

impl fmt::Display for PredicateArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.kind())
    }
}

/// Concatenated encoding of `main`'s arguments.
pub fn encode_arguments(arguments: &[PredicateArgument]) -> Vec<u8> {
    let mut out = Vec::new();
    for argument in arguments {
        argument.encode_into(&mut out);
    }
    out
}

mod b512_hex {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8; 64], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("0x{}", hex::encode(bytes)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<[u8; 64], D::Error> {
        let text = String::deserialize(deserializer)?;
        let stripped = text.strip_prefix("0x").unwrap_or(&text);
        let decoded = hex::decode(stripped).map_err(serde::de::Error::custom)?;
        decoded
            .try_into()
            .map_err(|_| serde::de::Error::custom("expected 64 bytes"))
    }
}

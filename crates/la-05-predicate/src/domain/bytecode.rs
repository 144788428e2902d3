//! # Bytecode Root
//!
//! The code is split into 16 KiB chunks, each zero-padded to a whole number
//! of words. Chunks are the leaves of a binary SHA-256 Merkle tree (leaf
//! prefix `0x00`, node prefix `0x01`; an unpaired node moves up a level
//! unchanged). Empty code has the root `sha256("")`.
//!
//! The predicate address is `sha256("FUEL" || root)`.

use super::arguments::WORD_SIZE;
use super::errors::PredicateError;
use la_01_address_codec::Address;
use serde::{Deserialize, Serialize};
use shared_crypto::{sha256, Sha256Hasher};

/// Leaf size of the bytecode Merkle tree.
pub const BYTECODE_CHUNK_SIZE: usize = 16 * 1024;

/// Domain seed prepended to the root when deriving an address.
const PREDICATE_SEED: &[u8] = b"FUEL";

const LEAF_PREFIX: u8 = 0x00;
const NODE_PREFIX: u8 = 0x01;

/// Bytes written over the bytecode at `offset`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurablePatch {
    pub offset: usize,
    pub data: Vec<u8>,
}

impl ConfigurablePatch {
    pub fn new(offset: usize, data: impl Into<Vec<u8>>) -> Self {
        Self {
            offset,
            data: data.into(),
        }
    }
}

/// Merkle root of the code.
pub fn bytecode_root(bytecode: &[u8]) -> [u8; 32] {
    let mut level: Vec<[u8; 32]> = bytecode.chunks(BYTECODE_CHUNK_SIZE).map(leaf_hash).collect();
    if level.is_empty() {
        return sha256(&[]);
    }

    while level.len() > 1 {
        let next: Vec<[u8; 32]> = level
            .chunks(2)
            .map(|pair| match pair {
                [left, right] => node_hash(left, right),
                _ => pair[0],
            })
            .collect();
        level = next;
    }
    level[0]
}

/// Address controlled by this code.
pub fn predicate_address(bytecode: &[u8]) -> Address {
    let root = bytecode_root(bytecode);
    let mut hasher = Sha256Hasher::new();
    hasher.update(PREDICATE_SEED).update(root);
    Address::from_raw_bytes(hasher.finalize())
}

/// Copy of `bytecode` with every patch applied in order.
///
/// # Errors
/// - `ConfigurableOutOfBounds`: a patch runs past the end of the code
pub fn apply_configurables(
    bytecode: &[u8],
    patches: &[ConfigurablePatch],
) -> Result<Vec<u8>, PredicateError> {
    let mut patched = bytecode.to_vec();
    for patch in patches {
        let end = patch.offset.checked_add(patch.data.len());
        match end {
            Some(end) if end <= patched.len() => {
                patched[patch.offset..end].copy_from_slice(&patch.data);
            }
            _ => {
                return Err(PredicateError::ConfigurableOutOfBounds {
                    offset: patch.offset,
                    len: patch.data.len(),
                    bytecode_len: patched.len(),
                })
            }
        }
    }
    Ok(patched)
}

fn leaf_hash(chunk: &[u8]) -> [u8; 32] {
    let padding = (WORD_SIZE - chunk.len() % WORD_SIZE) % WORD_SIZE;
    let mut hasher = Sha256Hasher::new();
    hasher
        .update([LEAF_PREFIX])
        .update(chunk)
        .update(&[0u8; WORD_SIZE][..padding]);
    hasher.finalize()
}

fn node_hash(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
    let mut hasher = Sha256Hasher::new();
    hasher.update([NODE_PREFIX]).update(left).update(right);
    hasher.finalize()
}

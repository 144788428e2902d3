//! # Message Digests
//!
//! `SHA-256(MESSAGE_DOMAIN_TAG || decimal(len(message)) || message)`
//!
//! The tag starts with `0x19`, which can never begin a serialized
//! transaction, so message digests and transaction ids live in disjoint
//! domains.

use shared_crypto::Sha256Hasher;

/// Prefix mixed into every message digest.
pub const MESSAGE_DOMAIN_TAG: &[u8] = b"\x19Fuel Signed Message:\n";

/// Digest of a UTF-8 message.
pub fn hash_message(message: &str) -> [u8; 32] {
    hash_message_bytes(message.as_bytes())
}

/// Digest of an arbitrary byte message.
pub fn hash_message_bytes(message: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256Hasher::new();
    hasher
        .update(MESSAGE_DOMAIN_TAG)
        .update(message.len().to_string())
        .update(message);
    hasher.finalize()
}

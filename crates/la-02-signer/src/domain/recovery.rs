//! # Signer Recovery
//!
//! ## Security Notes
//!
//! - Recovery only fails on malformed input: zero or out-of-range scalars,
//!   or an `r` that is not on the curve.
//! - A well-formed signature by a different key, or over a different digest,
//!   recovers a different address WITHOUT error. Use [`verify_signer`] when
//!   the caller needs authentication.

use super::errors::SignerError;
use super::signature::CompactSignature;
use la_01_address_codec::Address;
use shared_crypto::{ecdsa::recover_prehash, Secp256k1PublicKey};

/// Recover the public key that signed `digest`.
pub fn recover_public_key(
    digest: &[u8; 32],
    signature: &CompactSignature,
) -> Result<Secp256k1PublicKey, SignerError> {
    recover_prehash(digest, &signature.to_recoverable())
        .map_err(|e| SignerError::InvalidSignature(e.to_string()))
}

/// Recover the address that controls the key which signed `digest`.
pub fn recover_address(
    digest: &[u8; 32],
    signature: &CompactSignature,
) -> Result<Address, SignerError> {
    let public_key = recover_public_key(digest, signature)?;
    Ok(Address::from_secp256k1(&public_key))
}

/// Recover the signer and require it to be `expected`.
pub fn verify_signer(
    digest: &[u8; 32],
    signature: &CompactSignature,
    expected: &Address,
) -> Result<(), SignerError> {
    let actual = recover_address(digest, signature)?;
    if actual != *expected {
        tracing::debug!(%expected, %actual, "recovered signer does not match");
        return Err(SignerError::SignerMismatch {
            expected: *expected,
            actual,
        });
    }
    Ok(())
}

//! # ECDSA Signatures (secp256k1)
//!
//! Account keys and recoverable signatures on the secp256k1 curve.
//!
//! ## Security Properties
//!
//! - RFC 6979 deterministic nonces (no RNG dependency for signing)
//! - Low-S normalization, so the top bit of `s` is always free
//! - Secret scalars live in [`Zeroizing`] buffers or in `SigningKey`,
//!   both of which wipe on drop
//!
//! ## Use Cases
//!
//! - Message signing and signer recovery
//! - Address derivation (via the 64-byte uncompressed public key)

use crate::CryptoError;
use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};
pub use k256::elliptic_curve::rand_core::CryptoRngCore;
use std::fmt;
use zeroize::{Zeroize, Zeroizing};

/// Length of a secp256k1 secret scalar.
pub const SECRET_KEY_LEN: usize = 32;

/// Length of an uncompressed public key without the SEC1 `0x04` tag.
pub const PUBLIC_KEY_LEN: usize = 64;

/// A secp256k1 secret scalar in `[1, n-1]`.
///
/// Range-checked once at construction, so every `SecretKey` is usable as a
/// signing key. The scalar is wiped when the value is dropped. `Debug` never
/// prints it.
#[derive(Clone)]
pub struct SecretKey(SigningKey);

impl SecretKey {
    /// Validate and wrap a 32-byte scalar.
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self, CryptoError> {
        let bytes = Zeroizing::new(bytes);
        Self::from_slice(&bytes[..])
    }

    /// Parse a hex scalar, with or without `0x` prefix.
    pub fn from_hex(text: &str) -> Result<Self, CryptoError> {
        let stripped = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .unwrap_or(text);
        let decoded =
            Zeroizing::new(hex::decode(stripped).map_err(|_| CryptoError::InvalidPrivateKey)?);
        if decoded.len() != SECRET_KEY_LEN {
            return Err(CryptoError::InvalidKeyLength {
                expected: SECRET_KEY_LEN,
                actual: decoded.len(),
            });
        }
        Self::from_slice(&decoded)
    }

    fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        SigningKey::from_slice(bytes)
            .map(Self)
            .map_err(|_| CryptoError::InvalidPrivateKey)
    }

    /// Generate a scalar from the thread RNG.
    pub fn random() -> Self {
        Self::random_with(&mut rand::thread_rng())
    }

    /// Generate a scalar from a caller-supplied RNG.
    pub fn random_with<R: CryptoRngCore>(rng: &mut R) -> Self {
        Self(SigningKey::random(rng))
    }

    /// Copy of the raw scalar bytes, wiped on drop.
    pub fn to_bytes(&self) -> Zeroizing<[u8; 32]> {
        let mut field = self.0.to_bytes();
        let mut bytes = Zeroizing::new([0u8; 32]);
        bytes.copy_from_slice(&field);
        field[..].zeroize();
        bytes
    }

    /// `0x`-prefixed lowercase hex of the scalar, wiped on drop.
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(format!("0x{}", hex::encode(&self.to_bytes()[..])))
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(<redacted>)")
    }
}

impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        use k256::elliptic_curve::subtle::ConstantTimeEq;
        self.to_bytes()[..].ct_eq(&other.to_bytes()[..]).into()
    }
}

impl Eq for SecretKey {}

/// Uncompressed secp256k1 public key without the SEC1 tag (`x || y`, 64 bytes).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Secp256k1PublicKey([u8; 64]);

impl Secp256k1PublicKey {
    /// Create from `x || y` bytes, validating that the point is on the curve.
    pub fn from_bytes(bytes: [u8; 64]) -> Result<Self, CryptoError> {
        let mut sec1 = [0u8; 65];
        sec1[0] = 0x04;
        sec1[1..].copy_from_slice(&bytes);
        VerifyingKey::from_sec1_bytes(&sec1).map_err(|_| CryptoError::InvalidPublicKey)?;
        Ok(Self(bytes))
    }

    fn from_verifying_key(verifying_key: &VerifyingKey) -> Self {
        let point = verifying_key.to_encoded_point(false);
        // Uncompressed SEC1 encoding is always 0x04 || x || y
        let mut bytes = [0u8; 64];
        bytes.copy_from_slice(&point.as_bytes()[1..]);
        Self(bytes)
    }

    /// Get raw `x || y` bytes.
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    /// `0x`-prefixed lowercase hex.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Secp256k1PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secp256k1PublicKey({})", self.to_hex())
    }
}

/// Low-S ECDSA signature (`r || s`) plus the recovery parity bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecoverableSignature {
    /// `r || s`, big-endian, `s` in the lower half of the curve order.
    pub rs: [u8; 64],
    /// Whether the `R` point has an odd y-coordinate.
    pub y_odd: bool,
}

/// secp256k1 ECDSA keypair.
///
/// `SigningKey` zeroizes its scalar on drop.
pub struct Secp256k1KeyPair {
    signing_key: SigningKey,
    public_key: Secp256k1PublicKey,
}

impl Secp256k1KeyPair {
    /// Generate random keypair.
    pub fn generate() -> Self {
        Self::from_signing_key(SigningKey::random(&mut rand::thread_rng()))
    }

    /// Generate from a caller-supplied RNG.
    pub fn generate_with<R: CryptoRngCore>(rng: &mut R) -> Self {
        Self::from_signing_key(SigningKey::random(rng))
    }

    /// Derive the keypair for a secret scalar.
    pub fn from_secret(secret: &SecretKey) -> Self {
        Self::from_signing_key(secret.0.clone())
    }

    fn from_signing_key(signing_key: SigningKey) -> Self {
        let public_key = Secp256k1PublicKey::from_verifying_key(signing_key.verifying_key());
        Self {
            signing_key,
            public_key,
        }
    }

    /// Get public key (uncompressed, 64 bytes).
    pub fn public_key(&self) -> Secp256k1PublicKey {
        self.public_key
    }

    /// Copy of the secret scalar.
    pub fn secret(&self) -> SecretKey {
        SecretKey(self.signing_key.clone())
    }

    /// Sign a 32-byte digest (deterministic RFC 6979, low-S).
    pub fn sign_prehash(&self, digest: &[u8; 32]) -> Result<RecoverableSignature, CryptoError> {
        let (mut signature, mut recovery_id): (Signature, RecoveryId) = self
            .signing_key
            .sign_prehash_recoverable(digest)
            .map_err(|e| CryptoError::SigningFailed(e.to_string()))?;

        // Flipping s to n - s mirrors R, so the parity flips with it
        if let Some(normalized) = signature.normalize_s() {
            signature = normalized;
            recovery_id = RecoveryId::new(!recovery_id.is_y_odd(), recovery_id.is_x_reduced());
        }

        let mut rs = [0u8; 64];
        rs.copy_from_slice(&signature.to_bytes());
        Ok(RecoverableSignature {
            rs,
            y_odd: recovery_id.is_y_odd(),
        })
    }
}

impl fmt::Debug for Secp256k1KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secp256k1KeyPair")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

impl Clone for Secp256k1KeyPair {
    fn clone(&self) -> Self {
        Self {
            signing_key: self.signing_key.clone(),
            public_key: self.public_key,
        }
    }
}

/// Recover the public key that produced `signature` over `digest`.
///
/// Fails only if the signature is malformed: zero or out-of-range scalars,
/// or an `r` that is not the x-coordinate of a curve point. A well-formed
/// signature from a different key recovers a different public key.
pub fn recover_prehash(
    digest: &[u8; 32],
    signature: &RecoverableSignature,
) -> Result<Secp256k1PublicKey, CryptoError> {
    let sig = Signature::from_slice(&signature.rs).map_err(|_| CryptoError::InvalidSignature)?;
    let recovery_id = RecoveryId::new(signature.y_odd, false);
    let verifying_key = VerifyingKey::recover_from_prehash(digest, &sig, recovery_id)
        .map_err(|_| CryptoError::InvalidSignature)?;
    Ok(Secp256k1PublicKey::from_verifying_key(&verifying_key))
}

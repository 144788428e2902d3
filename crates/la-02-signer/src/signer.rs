//! # Signer
//!
//! A secp256k1 keypair bound to the address it controls.

use crate::domain::errors::SignerError;
use crate::domain::message::hash_message;
use crate::domain::recovery::recover_address;
use crate::domain::signature::CompactSignature;
use la_01_address_codec::Address;
use shared_crypto::ecdsa::CryptoRngCore;
use shared_crypto::{Secp256k1KeyPair, Secp256k1PublicKey, SecretKey};

/// Sign a digest with a secret key.
///
/// Deterministic: the same `(key, digest)` always yields the same signature.
pub fn sign(secret: &SecretKey, digest: &[u8; 32]) -> Result<CompactSignature, SignerError> {
    Signer::new(secret).sign(digest)
}

/// Keypair plus its derived address.
#[derive(Clone, Debug)]
pub struct Signer {
    keypair: Secp256k1KeyPair,
    address: Address,
}

impl Signer {
    /// Bind a signer to a secret key.
    pub fn new(secret: &SecretKey) -> Self {
        Self::from_keypair(Secp256k1KeyPair::from_secret(secret))
    }

    /// Parse a hex secret key (with or without `0x`).
    pub fn from_hex(text: &str) -> Result<Self, SignerError> {
        let secret = SecretKey::from_hex(text).map_err(SignerError::InvalidKey)?;
        Ok(Self::new(&secret))
    }

    /// Fresh random signer.
    pub fn generate() -> Self {
        Self::from_keypair(Secp256k1KeyPair::generate())
    }

    /// Fresh signer from a caller-supplied RNG.
    pub fn generate_with<R: CryptoRngCore>(rng: &mut R) -> Self {
        Self::from_keypair(Secp256k1KeyPair::generate_with(rng))
    }

    fn from_keypair(keypair: Secp256k1KeyPair) -> Self {
        let address = Address::from_secp256k1(&keypair.public_key());
        Self { keypair, address }
    }

    /// Address controlled by this key.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Uncompressed public key.
    pub fn public_key(&self) -> Secp256k1PublicKey {
        self.keypair.public_key()
    }

    /// Copy of the secret scalar, wiped on drop.
    pub fn secret(&self) -> SecretKey {
        self.keypair.secret()
    }

    /// Sign a 32-byte digest.
    pub fn sign(&self, digest: &[u8; 32]) -> Result<CompactSignature, SignerError> {
        self.keypair
            .sign_prehash(digest)
            .map(CompactSignature::from)
            .map_err(|e| SignerError::SigningFailed(e.to_string()))
    }

    /// Hash `message` with the message domain tag and sign the digest.
    pub fn sign_message(&self, message: &str) -> Result<CompactSignature, SignerError> {
        self.sign(&hash_message(message))
    }

    /// Recover the signer of `digest`. See [`recover_address`].
    pub fn recover_address(
        digest: &[u8; 32],
        signature: &CompactSignature,
    ) -> Result<Address, SignerError> {
        recover_address(digest, signature)
    }
}

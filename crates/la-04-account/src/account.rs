//! # Account
//!
//! Unlocked accounts carry a [`Signer`]; locked accounts carry only their
//! address. Both may be bound to a provider.

use crate::domain::config::AccountConfig;
use crate::domain::errors::AccountError;
use crate::domain::transaction::{PreparedTransaction, Witness};
use crate::ledger::LedgerAccount;
use crate::ports::outbound::Provider;
use async_trait::async_trait;
use la_01_address_codec::Address;
use la_02_signer::{CompactSignature, Signer};
use shared_crypto::ecdsa::CryptoRngCore;
use shared_crypto::{Secp256k1PublicKey, SecretKey};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};
use zeroize::Zeroizing;

/// A ledger account, locked or unlocked.
#[derive(Clone)]
pub struct Account {
    address: Address,
    signer: Option<Signer>,
    provider: Option<Arc<dyn Provider>>,
    config: AccountConfig,
}

impl Account {
    /// Fresh random key, unlocked.
    pub fn generate() -> Self {
        Self::from_signer(Signer::generate())
    }

    /// Fresh key from a caller-supplied RNG, unlocked.
    pub fn generate_with<R: CryptoRngCore>(rng: &mut R) -> Self {
        Self::from_signer(Signer::generate_with(rng))
    }

    /// Unlocked account from a hex private key.
    ///
    /// # Errors
    /// - `InvalidKey`: malformed hex, wrong length or out-of-range scalar
    pub fn from_private_key(hex_key: &str) -> Result<Self, AccountError> {
        Ok(Self::from_signer(Signer::from_hex(hex_key)?))
    }

    /// Unlocked account from a secret key.
    pub fn from_secret(secret: &SecretKey) -> Self {
        Self::from_signer(Signer::new(secret))
    }

    /// Locked account for an address.
    pub fn from_address(address: Address) -> Self {
        Self {
            address,
            signer: None,
            provider: None,
            config: AccountConfig::default(),
        }
    }

    fn from_signer(signer: Signer) -> Self {
        Self {
            address: signer.address(),
            signer: Some(signer),
            provider: None,
            config: AccountConfig::default(),
        }
    }

    /// Bind a provider at construction.
    pub fn with_provider(mut self, provider: Arc<dyn Provider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: AccountConfig) -> Result<Self, AccountError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Bind or replace the provider.
    pub fn connect(&mut self, provider: Arc<dyn Provider>) {
        self.provider = Some(provider);
    }

    /// Drop the provider binding, returning it.
    pub fn disconnect(&mut self) -> Option<Arc<dyn Provider>> {
        self.provider.take()
    }

    /// Address this account spends from.
    pub fn address(&self) -> Address {
        self.address
    }

    pub fn is_locked(&self) -> bool {
        self.signer.is_none()
    }

    /// Drop the signing key. The address and provider are kept.
    pub fn lock(mut self) -> Self {
        self.signer = None;
        self
    }

    /// Attach a signing key.
    ///
    /// The account takes the address the key controls. A key for a
    /// different address is accepted with a warning; use
    /// [`Account::try_unlock`] to refuse it instead.
    pub fn unlock(mut self, secret: &SecretKey) -> Self {
        let signer = Signer::new(secret);
        if signer.address() != self.address {
            warn!(
                account = %self.address,
                key = %signer.address(),
                "Unlocking with a key for a different address"
            );
        }
        self.address = signer.address();
        self.signer = Some(signer);
        self
    }

    /// Attach a signing key only if it controls this address.
    ///
    /// # Errors
    /// - `KeyMismatch`: the key controls another address
    pub fn try_unlock(self, secret: &SecretKey) -> Result<Self, AccountError> {
        let actual = Signer::new(secret).address();
        if actual != self.address {
            return Err(AccountError::KeyMismatch {
                expected: self.address,
                actual,
            });
        }
        Ok(self.unlock(secret))
    }

    fn signer(&self) -> Result<&Signer, AccountError> {
        self.signer.as_ref().ok_or(AccountError::NoSigningKey)
    }

    pub fn public_key(&self) -> Result<Secp256k1PublicKey, AccountError> {
        Ok(self.signer()?.public_key())
    }

    /// Hex private key, wiped when dropped.
    pub fn private_key(&self) -> Result<Zeroizing<String>, AccountError> {
        Ok(self.signer()?.secret().to_hex())
    }

    /// Sign `message` with the message domain tag.
    pub fn sign_message(&self, message: &str) -> Result<CompactSignature, AccountError> {
        Ok(self.signer()?.sign_message(message)?)
    }

    /// Sign a 32-byte digest.
    pub fn sign_digest(&self, digest: &[u8; 32]) -> Result<CompactSignature, AccountError> {
        Ok(self.signer()?.sign(digest)?)
    }
}

#[async_trait]
impl LedgerAccount for Account {
    fn address(&self) -> Address {
        self.address
    }

    fn provider(&self) -> Option<&Arc<dyn Provider>> {
        self.provider.as_ref()
    }

    fn config(&self) -> &AccountConfig {
        &self.config
    }

    fn ensure_can_authorize(&self) -> Result<(), AccountError> {
        self.signer().map(|_| ())
    }

    fn authorize(&self, prepared: &PreparedTransaction) -> Result<Witness, AccountError> {
        let signature = self.sign_digest(prepared.id.as_bytes())?;
        debug!(tx_id = %prepared.id, "Signed transaction id");
        Ok(Witness::Signature(signature))
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("address", &self.address)
            .field("locked", &self.is_locked())
            .field("connected", &self.provider.is_some())
            .finish()
    }
}

//! Command implementations.

use anyhow::{Context, Result};
use la_01_address_codec::Address;
use la_02_signer::{hash_message, recover_address, CompactSignature};
use la_04_account::Account;
use la_05_predicate::PredicateAccount;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Both textual forms of an address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressReport {
    pub hex: String,
    pub bech32: String,
}

impl From<Address> for AddressReport {
    fn from(address: Address) -> Self {
        Self {
            hex: address.to_hex_string(),
            bech32: address.to_checksummed_string(),
        }
    }
}

impl fmt::Display for AddressReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "address (hex):    {}", self.hex)?;
        write!(f, "address (bech32): {}", self.bech32)
    }
}

/// A freshly generated key.
#[derive(Debug, Clone, Serialize)]
pub struct KeyReport {
    pub private_key: String,
    pub public_key: String,
    #[serde(flatten)]
    pub address: AddressReport,
}

impl fmt::Display for KeyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "private key:      {}", self.private_key)?;
        writeln!(f, "public key:       {}", self.public_key)?;
        write!(f, "{}", self.address)
    }
}

/// A signature and who made it.
#[derive(Debug, Clone, Serialize)]
pub struct SignatureReport {
    pub message_hash: String,
    pub signature: String,
    #[serde(flatten)]
    pub signer: AddressReport,
}

impl fmt::Display for SignatureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "message hash:     {}", self.message_hash)?;
        writeln!(f, "signature:        {}", self.signature)?;
        write!(f, "{}", self.signer)
    }
}

/// New random key.
pub fn generate() -> Result<KeyReport> {
    let account = Account::generate();
    debug!(address = %account.address(), "Generated key");
    Ok(KeyReport {
        private_key: String::clone(&*account.private_key()?),
        public_key: account.public_key()?.to_hex(),
        address: account.address().into(),
    })
}

/// Re-encode an address given in either form.
pub fn convert(address: &str) -> Result<AddressReport> {
    let address = Address::from_ambiguous_string(address.trim())
        .with_context(|| format!("cannot parse address `{address}`"))?;
    Ok(address.into())
}

/// Address of an uncompressed public key.
pub fn from_public_key(public_key: &str) -> Result<AddressReport> {
    let address =
        Address::from_public_key_hex(public_key.trim()).context("cannot derive address")?;
    Ok(address.into())
}

/// Sign `message` with `key`.
pub fn sign(key: &str, message: &str) -> Result<SignatureReport> {
    let account = Account::from_private_key(key.trim()).context("invalid private key")?;
    let signature = account.sign_message(message)?;
    Ok(SignatureReport {
        message_hash: format!("0x{}", hex::encode(hash_message(message))),
        signature: signature.to_hex(),
        signer: account.address().into(),
    })
}

/// Recover the signer of `message`.
pub fn recover(message: &str, signature: &str) -> Result<SignatureReport> {
    let parsed = CompactSignature::from_hex(signature.trim()).context("invalid signature")?;
    let digest = hash_message(message);
    let signer = recover_address(&digest, &parsed).context("signature does not recover")?;
    debug!(%signer, "Recovered signer");
    Ok(SignatureReport {
        message_hash: format!("0x{}", hex::encode(digest)),
        signature: parsed.to_hex(),
        signer: signer.into(),
    })
}

/// Address of predicate bytecode.
pub fn predicate(bytecode: &str) -> Result<AddressReport> {
    let predicate = PredicateAccount::from_hex(bytecode.trim(), None)?;
    debug!(
        bytes = predicate.bytecode().len(),
        address = %predicate.address(),
        "Derived predicate address"
    );
    Ok(predicate.address().into())
}

//! # Predicate Account
//!
//! Spends coins owned by its bytecode's address. Authorization is the
//! bytecode plus encoded input data; the ledger evaluates it.

use crate::domain::abi::PredicateAbi;
use crate::domain::arguments::{encode_arguments, PredicateArgument};
use crate::domain::bytecode::{apply_configurables, predicate_address, ConfigurablePatch};
use crate::domain::errors::PredicateError;
use async_trait::async_trait;
use la_01_address_codec::Address;
use la_04_account::{
    AccountConfig, AccountError, LedgerAccount, PredicateWitness, PreparedTransaction, Provider,
    Witness,
};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// An account controlled by predicate bytecode.
#[derive(Clone)]
pub struct PredicateAccount {
    bytecode: Vec<u8>,
    address: Address,
    abi: Option<PredicateAbi>,
    input_data: Vec<PredicateArgument>,
    encoded_input: Vec<u8>,
    provider: Option<Arc<dyn Provider>>,
    config: AccountConfig,
}

impl PredicateAccount {
    /// Account for `bytecode`, optionally bound to a provider.
    pub fn new(bytecode: impl Into<Vec<u8>>, provider: Option<Arc<dyn Provider>>) -> Self {
        let bytecode = bytecode.into();
        let address = predicate_address(&bytecode);
        Self {
            bytecode,
            address,
            abi: None,
            input_data: Vec::new(),
            encoded_input: Vec::new(),
            provider,
            config: AccountConfig::default(),
        }
    }

    /// Account for hex bytecode (with or without `0x`).
    pub fn from_hex(
        bytecode: &str,
        provider: Option<Arc<dyn Provider>>,
    ) -> Result<Self, PredicateError> {
        let stripped = bytecode.strip_prefix("0x").unwrap_or(bytecode);
        let bytes =
            hex::decode(stripped).map_err(|e| PredicateError::InvalidBytecode(e.to_string()))?;
        Ok(Self::new(bytes, provider))
    }

    /// Attach an ABI; input data already set is checked against it.
    pub fn with_abi(mut self, abi: PredicateAbi) -> Result<Self, PredicateError> {
        if !self.input_data.is_empty() {
            abi.check_input_data(&self.input_data)?;
        }
        self.abi = Some(abi);
        Ok(self)
    }

    /// Set the arguments passed to `main`.
    ///
    /// # Errors
    /// - `InputDataMismatch`: the ABI's `main` takes different arguments
    pub fn with_input_data(
        mut self,
        arguments: impl IntoIterator<Item = PredicateArgument>,
    ) -> Result<Self, PredicateError> {
        let arguments: Vec<PredicateArgument> = arguments.into_iter().collect();
        if let Some(abi) = &self.abi {
            abi.check_input_data(&arguments)?;
        }
        self.encoded_input = encode_arguments(&arguments);
        self.input_data = arguments;
        Ok(self)
    }

    /// Patch the bytecode. The address changes with it.
    ///
    /// # Errors
    /// - `ConfigurableOutOfBounds`: a patch runs past the end of the code
    pub fn with_configurables(mut self, patches: &[ConfigurablePatch]) -> Result<Self, PredicateError> {
        self.bytecode = apply_configurables(&self.bytecode, patches)?;
        let previous = self.address;
        self.address = predicate_address(&self.bytecode);
        debug!(from = %previous, to = %self.address, patches = patches.len(), "Predicate configured");
        Ok(self)
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: AccountConfig) -> Result<Self, PredicateError> {
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

    /// Address derived from the (configured) bytecode. No network access.
    pub fn address(&self) -> Address {
        self.address
    }

    pub fn bytecode(&self) -> &[u8] {
        &self.bytecode
    }

    pub fn abi(&self) -> Option<&PredicateAbi> {
        self.abi.as_ref()
    }

    pub fn input_data(&self) -> &[PredicateArgument] {
        &self.input_data
    }

    /// Encoded input data sent with every spend.
    pub fn encoded_input_data(&self) -> &[u8] {
        &self.encoded_input
    }
}

#[async_trait]
impl LedgerAccount for PredicateAccount {
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
        Ok(())
    }

    fn authorize(&self, prepared: &PreparedTransaction) -> Result<Witness, AccountError> {
        debug!(tx_id = %prepared.id, predicate = %self.address, "Attaching predicate witness");
        Ok(Witness::Predicate(PredicateWitness {
            bytecode: self.bytecode.clone(),
            input_data: self.encoded_input.clone(),
        }))
    }
}

impl fmt::Debug for PredicateAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateAccount")
            .field("address", &self.address)
            .field("bytecode_len", &self.bytecode.len())
            .field("arguments", &self.input_data.len())
            .field("connected", &self.provider.is_some())
            .finish()
    }
}

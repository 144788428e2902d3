//! # Address Input
//!
//! Callers that do not know what form an address arrives in tag it here
//! instead of letting the codec guess from the runtime type. Text is the
//! only variant that still needs disambiguation, and it always tries hex
//! before checksummed.

use super::address::Address;

/// Explicitly tagged source for [`Address::from_dynamic_input`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressInput<'a> {
    /// Already an address.
    Address(Address),
    /// 32 raw bytes.
    Bytes(&'a [u8]),
    /// Hex or checksummed text.
    Text(&'a str),
    /// Uncompressed public key to derive from.
    PublicKey(&'a [u8]),
}

impl From<Address> for AddressInput<'_> {
    fn from(address: Address) -> Self {
        Self::Address(address)
    }
}

impl<'a> From<&'a Address> for AddressInput<'a> {
    fn from(address: &'a Address) -> Self {
        Self::Address(*address)
    }
}

impl<'a> From<&'a str> for AddressInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for AddressInput<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text.as_str())
    }
}

impl<'a> From<&'a [u8]> for AddressInput<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a> From<&'a [u8; 32]> for AddressInput<'a> {
    fn from(bytes: &'a [u8; 32]) -> Self {
        Self::Bytes(bytes)
    }
}

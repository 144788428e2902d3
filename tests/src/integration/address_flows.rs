//! # Address and Signature Flows
//!
//! Known vectors for the two address encodings, public-key derivation and
//! message signing, checked through the public crate APIs together.

#[cfg(test)]
mod tests {
    use la_01_address_codec::{Address, AddressError};
    use la_02_signer::{hash_message, recover_address, verify_signer, SignerError};
    use la_04_account::Account;

    const PUBLIC_KEY: &str = "0x2f34bc0df4db0ec391792cedb05768832b49b1aa3a2dd8c30054d1af00f67d00b74b7acbbf3087c8e0b1a4c343db50aa471d21f278ff5ce09f07795d541fb47e";
    const ADDRESS_B256: &str = "0xf1e92c42b90934aa6372e30bc568a326f6e66a1a0288595e6e3fbd392a4f3e6e";
    const ADDRESS_BECH32: &str = "fuel1785jcs4epy625cmjuv9u269rymmwv6s6q2y9jhnw877nj2j08ehqce3rxf";
    const ADDRESS_BYTES: [u8; 32] = [
        241, 233, 44, 66, 185, 9, 52, 170, 99, 114, 227, 11, 197, 104, 163, 38, 246, 230, 106, 26,
        2, 136, 89, 94, 110, 63, 189, 57, 42, 79, 62, 110,
    ];

    #[test]
    fn test_address_from_checksummed() {
        let address = Address::from_checksummed_string(ADDRESS_BECH32).unwrap();
        assert_eq!(address.to_hex_string(), ADDRESS_B256);
        assert_eq!(address.to_bytes(), ADDRESS_BYTES);
    }

    #[test]
    fn test_address_from_public_key() {
        let address = Address::from_public_key_hex(PUBLIC_KEY).unwrap();
        assert_eq!(address.to_checksummed_string(), ADDRESS_BECH32);
        assert_eq!(address.to_hex_string(), ADDRESS_B256);
    }

    #[test]
    fn test_every_input_form_agrees() {
        let from_bytes = Address::from_raw_bytes(ADDRESS_BYTES);
        assert_eq!(Address::from_dynamic_input(ADDRESS_B256).unwrap(), from_bytes);
        assert_eq!(Address::from_dynamic_input(ADDRESS_BECH32).unwrap(), from_bytes);
        assert_eq!(Address::from_dynamic_input(&ADDRESS_BYTES).unwrap(), from_bytes);
        assert!(matches!(
            Address::from_dynamic_input("not an address"),
            Err(AddressError::UnresolvableAddress(_))
        ));
    }

    #[test]
    fn test_account_signature_authenticates() {
        let account = Account::from_private_key(
            "0xa1447cd75accc6b71a976fd3401a1f6ce318d27ba660b0315ee6ac347bf39568",
        )
        .unwrap();
        let message = "my message";
        let signature = account.sign_message(message).unwrap();
        let digest = hash_message(message);

        assert_eq!(recover_address(&digest, &signature).unwrap(), account.address());
        assert!(verify_signer(&digest, &signature, &account.address()).is_ok());

        let stranger = Account::generate();
        assert!(matches!(
            verify_signer(&digest, &signature, &stranger.address()),
            Err(SignerError::SignerMismatch { .. })
        ));
        assert_ne!(
            recover_address(&hash_message("other message"), &signature).unwrap(),
            account.address()
        );
    }
}

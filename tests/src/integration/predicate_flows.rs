//! # Predicate Flows
//!
//! A three-signature predicate funded by a wallet and spent by itself. The
//! ledger sees the bytecode and the encoded signatures as the witness.

#[cfg(test)]
mod tests {
    use crate::ledger::{InMemoryLedger, TRANSFER_GAS};
    use la_01_address_codec::Address;
    use la_04_account::{Account, AccountError, LedgerAccount, Provider, TxParams, Witness};
    use la_05_predicate::{
        ConfigurablePatch, PredicateAbi, PredicateAccount, PredicateArgument, PredicateError,
    };
    use shared_types::{BASE_ASSET_ID, U256};
    use std::sync::Arc;

    const PRIVATE_KEY_1: &str = "0x862512a2363db2b3a375c0d4bbbd27172180d89f23f2e259bac850ab02619301";
    const PRIVATE_KEY_2: &str = "0x37fa81c84ccd547c30c176b118d5cb892bdb113e8e80141f266519422ef9eefd";
    const PRIVATE_KEY_3: &str = "0x976e5c3fa620092c718d852ca703b6da9e3075b9f2ecb8ed42d9f746bf26aafb";

    /// Stand-in bytecode; the ledger never executes it.
    const PREDICATE_BYTECODE: &str = "0x1a405000910000206144000b6148000542411480504cc04c72580020";

    const TRIPLE_SIG_ABI: &str = r#"{
        "types": [
            { "typeId": 0, "type": "bool", "components": null, "typeParameters": null },
            { "typeId": 1, "type": "struct B512", "components": null, "typeParameters": null },
            {
                "typeId": 2,
                "type": "[_; 3]",
                "components": [{ "name": "__array_element", "type": 1, "typeArguments": null }],
                "typeParameters": null
            }
        ],
        "functions": [
            {
                "inputs": [{ "name": "data", "type": 2, "typeArguments": null }],
                "name": "main",
                "output": { "name": "", "type": 0, "typeArguments": null },
                "attributes": null
            }
        ],
        "loggedTypes": [],
        "configurables": []
    }"#;

    fn params() -> TxParams {
        TxParams::default()
            .with_gas_price(1)
            .with_gas_limit(10_000)
            .with_fee_reserve(TRANSFER_GAS)
    }

    fn signatures(data_to_sign: &str) -> PredicateArgument {
        let signatures: Vec<PredicateArgument> = [PRIVATE_KEY_1, PRIVATE_KEY_2, PRIVATE_KEY_3]
            .iter()
            .map(|key| {
                let signature = Account::from_private_key(key)
                    .unwrap()
                    .sign_message(data_to_sign)
                    .unwrap();
                PredicateArgument::from(signature)
            })
            .collect();
        PredicateArgument::Array(signatures)
    }

    #[tokio::test]
    async fn test_fund_and_spend_predicate() {
        let ledger = Arc::new(InMemoryLedger::new());
        let provider: Arc<dyn Provider> = ledger.clone();

        let wallet1 = Account::from_private_key(PRIVATE_KEY_1)
            .unwrap()
            .with_provider(provider.clone());
        let receiver = Account::generate().with_provider(provider.clone());
        ledger.fund(wallet1.address(), BASE_ASSET_ID, 1_000_000).await;

        let data_to_sign = "0x0000000000000000000000000000000000000000000000000000000000000000";
        let predicate = PredicateAccount::from_hex(PREDICATE_BYTECODE, Some(provider))
            .unwrap()
            .with_abi(PredicateAbi::from_json(TRIPLE_SIG_ABI).unwrap())
            .unwrap()
            .with_input_data([signatures(data_to_sign)])
            .unwrap();
        let initial = predicate.get_balance(BASE_ASSET_ID).await.unwrap();
        assert_eq!(initial, U256::zero());

        wallet1
            .transfer(&predicate.address(), U256::from(600_000u64), BASE_ASSET_ID, params())
            .await
            .unwrap()
            .wait_for_result()
            .await
            .unwrap();
        assert_eq!(
            predicate.get_balance(BASE_ASSET_ID).await.unwrap(),
            U256::from(600_000u64)
        );

        wallet1
            .transfer(&predicate.address(), U256::from(1_000u64), BASE_ASSET_ID, params())
            .await
            .unwrap();
        assert_eq!(
            predicate.get_balance(BASE_ASSET_ID).await.unwrap(),
            U256::from(601_000u64)
        );

        predicate
            .transfer(&receiver.address(), U256::from(100u64), BASE_ASSET_ID, params())
            .await
            .unwrap()
            .wait_for_result()
            .await
            .unwrap();

        assert_eq!(
            receiver.get_balance(BASE_ASSET_ID).await.unwrap(),
            U256::from(100u64)
        );
        assert_eq!(
            predicate.get_balance(BASE_ASSET_ID).await.unwrap(),
            U256::from(601_000u64 - 100 - TRANSFER_GAS)
        );

        let submissions = ledger.submissions().await;
        let (prepared, witness) = submissions.last().unwrap();
        assert_eq!(prepared.draft.sender, predicate.address());
        match witness {
            Witness::Predicate(witness) => {
                assert_eq!(witness.bytecode, predicate.bytecode());
                assert_eq!(witness.input_data.len(), 3 * 64);
                assert_eq!(witness.input_data, predicate.encoded_input_data());
            }
            other => panic!("expected predicate witness, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_wrong_signature_count_rejected_before_network() {
        let abi = PredicateAbi::from_json(TRIPLE_SIG_ABI).unwrap();
        let two = PredicateArgument::Array(vec![PredicateArgument::B512([1; 64]); 2]);

        let result = PredicateAccount::from_hex(PREDICATE_BYTECODE, None)
            .unwrap()
            .with_abi(abi)
            .unwrap()
            .with_input_data([two]);
        assert!(matches!(result, Err(PredicateError::InputDataMismatch(_))));
    }

    #[tokio::test]
    async fn test_configured_predicate_owns_different_coins() {
        let ledger = Arc::new(InMemoryLedger::new());
        let provider: Arc<dyn Provider> = ledger.clone();

        let plain = PredicateAccount::from_hex(PREDICATE_BYTECODE, Some(provider.clone())).unwrap();
        let configured = plain
            .clone()
            .with_configurables(&[ConfigurablePatch::new(8, [0u8; 8])])
            .unwrap();
        ledger.fund(plain.address(), BASE_ASSET_ID, 50).await;

        assert_ne!(plain.address(), configured.address());
        assert_eq!(plain.get_balance(BASE_ASSET_ID).await.unwrap(), U256::from(50u64));
        assert_eq!(configured.get_balance(BASE_ASSET_ID).await.unwrap(), U256::zero());
    }

    #[tokio::test]
    async fn test_predicate_without_provider() {
        let predicate = PredicateAccount::from_hex(PREDICATE_BYTECODE, None).unwrap();
        assert_eq!(
            predicate.get_coins(None).await,
            Err(AccountError::NoProviderConfigured)
        );
        assert!(matches!(
            predicate
                .transfer(&Address::random(), U256::one(), BASE_ASSET_ID, params())
                .await,
            Err(AccountError::NoProviderConfigured)
        ));
    }
}

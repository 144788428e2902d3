//! # Wallet Flows
//!
//! Key-holding accounts against the in-memory ledger: balances, resource
//! selection, transfers, locking and the snapshot nature of selection.

#[cfg(test)]
mod tests {
    use crate::ledger::{InMemoryLedger, TRANSFER_GAS};
    use la_01_address_codec::Address;
    use la_03_resource_selection::{AssetBalance, SelectionError, SpendQuery};
    use la_04_account::{
        Account, AccountError, LedgerAccount, Provider, ProviderError, TransactionProvider,
        TransferDraft, TxParams,
    };
    use shared_crypto::SecretKey;
    use shared_types::{AssetId, BASE_ASSET_ID, U256};
    use std::sync::Arc;

    const ASSET_A: AssetId = AssetId::new([0xAA; 32]);
    const ASSET_B: AssetId = AssetId::new([0xBB; 32]);

    fn params() -> TxParams {
        TxParams::default()
            .with_gas_price(1)
            .with_gas_limit(10_000)
            .with_fee_reserve(TRANSFER_GAS)
    }

    fn setup() -> (Arc<InMemoryLedger>, Arc<dyn Provider>) {
        let ledger = Arc::new(InMemoryLedger::new());
        let provider: Arc<dyn Provider> = ledger.clone();
        (ledger, provider)
    }

    #[tokio::test]
    async fn test_spendable_resources_wallet_scenario() {
        let (ledger, provider) = setup();
        let wallet = Account::generate().with_provider(provider);
        ledger.fund(wallet.address(), BASE_ASSET_ID, 42).await;
        ledger.fund(wallet.address(), ASSET_A, 100).await;

        let resources = wallet
            .get_resources_to_spend(
                &[
                    SpendQuery::new(BASE_ASSET_ID, 32u64).with_max(42u64),
                    SpendQuery::new(ASSET_A, 50u64),
                ],
                &[],
            )
            .await
            .unwrap();

        let amounts: Vec<U256> = resources.iter().map(|c| c.amount).collect();
        assert_eq!(amounts, vec![U256::from(42u64), U256::from(100u64)]);
    }

    #[tokio::test]
    async fn test_balances_are_aggregated() {
        let (ledger, provider) = setup();
        let wallet = Account::generate().with_provider(provider);
        ledger.fund(wallet.address(), ASSET_B, 100).await;
        ledger.fund(wallet.address(), ASSET_A, 42).await;
        ledger.fund(wallet.address(), ASSET_B, 200).await;
        ledger.fund(Address::random(), ASSET_A, 7).await;

        assert_eq!(
            wallet.get_balances().await.unwrap(),
            vec![
                AssetBalance::new(ASSET_A, 42u64),
                AssetBalance::new(ASSET_B, 300u64)
            ]
        );
        assert_eq!(wallet.get_balance(ASSET_B).await.unwrap(), U256::from(300u64));
        assert_eq!(wallet.get_coins(Some(ASSET_B)).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_wallet() {
        let (_ledger, provider) = setup();
        let wallet = Account::generate().with_provider(provider);
        assert!(wallet.get_balances().await.unwrap().is_empty());
        assert_eq!(wallet.get_balance(BASE_ASSET_ID).await.unwrap(), U256::zero());
    }

    #[tokio::test]
    async fn test_transfer_moves_funds_and_returns_change() {
        let (ledger, provider) = setup();
        let sender = Account::generate().with_provider(provider.clone());
        let recipient = Account::from_address(Address::random()).with_provider(provider);
        ledger.fund(sender.address(), BASE_ASSET_ID, 1_000).await;

        let handle = sender
            .transfer(&recipient.address(), U256::from(250u64), BASE_ASSET_ID, params())
            .await
            .unwrap();
        let outcome = handle.wait_for_result().await.unwrap();
        assert_eq!(outcome.tx_id, handle.id());
        assert_eq!(outcome.block_height, ledger.height().await);

        assert_eq!(
            recipient.get_balance(BASE_ASSET_ID).await.unwrap(),
            U256::from(250u64)
        );
        assert_eq!(
            sender.get_balance(BASE_ASSET_ID).await.unwrap(),
            U256::from(1_000u64 - 250 - TRANSFER_GAS)
        );
    }

    #[tokio::test]
    async fn test_transfer_of_other_asset_pays_fee_in_base() {
        let (ledger, provider) = setup();
        let sender = Account::generate().with_provider(provider);
        let recipient = Address::random();
        ledger.fund(sender.address(), ASSET_A, 500).await;
        ledger.fund(sender.address(), BASE_ASSET_ID, 100).await;

        sender
            .transfer(&recipient, U256::from(500u64), ASSET_A, params())
            .await
            .unwrap();

        assert_eq!(sender.get_balance(ASSET_A).await.unwrap(), U256::zero());
        assert_eq!(
            sender.get_balance(BASE_ASSET_ID).await.unwrap(),
            U256::from(100 - TRANSFER_GAS)
        );
    }

    #[tokio::test]
    async fn test_transfer_without_fee_coins_fails_selection() {
        let (ledger, provider) = setup();
        let sender = Account::generate().with_provider(provider);
        ledger.fund(sender.address(), ASSET_A, 500).await;

        let result = sender
            .transfer(&Address::random(), U256::from(1u64), ASSET_A, params())
            .await;
        assert!(matches!(
            result,
            Err(AccountError::Selection(SelectionError::InsufficientFunds { asset, .. }))
                if asset == BASE_ASSET_ID
        ));
    }

    #[tokio::test]
    async fn test_locked_wallet_queries_but_cannot_spend() {
        let (ledger, provider) = setup();
        let secret = SecretKey::random();
        let unlocked = Account::from_secret(&secret);
        let locked = Account::from_address(unlocked.address()).with_provider(provider);
        ledger.fund(locked.address(), BASE_ASSET_ID, 100).await;

        assert_eq!(locked.get_balance(BASE_ASSET_ID).await.unwrap(), U256::from(100u64));
        assert!(matches!(
            locked
                .transfer(&Address::random(), U256::from(5u64), BASE_ASSET_ID, params())
                .await,
            Err(AccountError::NoSigningKey)
        ));

        let unlocked = locked.try_unlock(&secret).unwrap();
        unlocked
            .transfer(&Address::random(), U256::from(5u64), BASE_ASSET_ID, params())
            .await
            .unwrap();
        assert_eq!(ledger.submissions().await.len(), 1);
    }

    #[tokio::test]
    async fn test_lock_unlock_preserves_identity() {
        let wallet = Account::generate();
        let secret = SecretKey::from_hex(&wallet.private_key().unwrap()).unwrap();
        let address = wallet.address();

        let relocked = wallet.lock().unlock(&secret);
        assert_eq!(relocked.address(), address);
        assert!(relocked.sign_message("still mine").is_ok());
    }

    #[tokio::test]
    async fn test_disconnected_wallet_reports_missing_provider() {
        let (ledger, provider) = setup();
        let mut wallet = Account::generate().with_provider(provider);
        ledger.fund(wallet.address(), BASE_ASSET_ID, 10).await;

        wallet.disconnect();
        assert_eq!(wallet.get_balances().await, Err(AccountError::NoProviderConfigured));
        assert!(matches!(
            wallet
                .transfer(&Address::random(), U256::one(), BASE_ASSET_ID, params())
                .await,
            Err(AccountError::NoProviderConfigured)
        ));
    }

    #[tokio::test]
    async fn test_stale_selection_is_rejected_by_ledger() {
        let (ledger, provider) = setup();
        let wallet = Account::generate().with_provider(provider.clone());
        ledger.fund(wallet.address(), BASE_ASSET_ID, 100).await;

        // Selection does not reserve coins: take a snapshot, then spend it.
        let snapshot = wallet
            .get_resources_to_spend(&[SpendQuery::new(BASE_ASSET_ID, 50u64)], &[])
            .await
            .unwrap();
        wallet
            .transfer(&Address::random(), U256::from(50u64), BASE_ASSET_ID, params())
            .await
            .unwrap();

        let stale = provider
            .assemble(TransferDraft {
                sender: wallet.address(),
                recipient: Address::random(),
                asset_id: BASE_ASSET_ID,
                amount: U256::from(50u64),
                inputs: snapshot,
                params: params(),
            })
            .await
            .unwrap();
        let witness = wallet.authorize(&stale).unwrap();
        let result = provider.submit(stale, witness).await;
        assert!(matches!(result, Err(ProviderError::Rejected(_))));
    }

    #[tokio::test]
    async fn test_excluded_coins_are_skipped() {
        let (ledger, provider) = setup();
        let wallet = Account::generate().with_provider(provider);
        let big = ledger.fund(wallet.address(), BASE_ASSET_ID, 100).await;
        ledger.fund(wallet.address(), BASE_ASSET_ID, 30).await;

        let coins = wallet
            .get_resources_to_spend(&[SpendQuery::new(BASE_ASSET_ID, 20u64)], &[big.id])
            .await
            .unwrap();
        assert_eq!(coins.len(), 1);
        assert_eq!(coins[0].amount, U256::from(30u64));
    }
}

//! # Mobile Wallet Store
//!
//! The signed-in user's wallets plus the send form. A successful send records
//! the transaction and reloads the wallet list so balances reflect it.

use std::sync::Arc;

use parking_lot::RwLock;
use shared::dto::{CreateWalletRequest, SendTransactionRequest, Sort, Transaction, Wallet, WalletFilters};

use super::list::ListStore;
use crate::app::state::SendState;
use crate::core::error::Result;
use crate::core::service::{ListSource, TransactionsApi, WalletsApi};

#[derive(Clone)]
pub struct WalletStore {
    wallets: ListStore<Wallet, WalletFilters>,
    wallet_api: Arc<dyn WalletsApi>,
    transactions: Arc<dyn TransactionsApi>,
    send: Arc<RwLock<SendState>>,
}

impl WalletStore {
    pub fn new(
        source: Arc<dyn ListSource<Wallet, WalletFilters>>,
        wallet_api: Arc<dyn WalletsApi>,
        transactions: Arc<dyn TransactionsApi>,
    ) -> Self {
        Self {
            wallets: ListStore::new("wallet", source, Sort::desc("createdAt")),
            wallet_api,
            transactions,
            send: Arc::new(RwLock::new(SendState::default())),
        }
    }

    /// The underlying wallet list.
    pub fn wallets(&self) -> &ListStore<Wallet, WalletFilters> {
        &self.wallets
    }

    pub fn send_state(&self) -> SendState {
        self.send.read().clone()
    }

    pub fn last_transaction(&self) -> Option<Transaction> {
        self.send.read().last_transaction.clone()
    }

    /// Restrict the list to one user's wallets.
    pub fn set_owner(&self, user_id: &str) {
        self.wallets
            .update_filters(|filters| filters.user_id = Some(user_id.to_string()));
    }

    pub async fn fetch(&self) {
        self.wallets.fetch().await;
    }

    pub async fn create_wallet(&self, request: &CreateWalletRequest) -> Result<Wallet> {
        let created = self.wallets.track(self.wallet_api.create_wallet(request)).await?;
        tracing::info!(wallet_id = %created.id, network = %created.network, "Wallet created");
        self.wallets.fetch().await;
        Ok(created)
    }

    pub async fn send(&self, request: &SendTransactionRequest) -> Result<Transaction> {
        {
            let mut send = self.send.write();
            send.is_sending = true;
            send.error = None;
        }

        let result = self.transactions.send_transaction(request).await;

        {
            let mut send = self.send.write();
            send.is_sending = false;
            match &result {
                Ok(transaction) => send.last_transaction = Some(transaction.clone()),
                Err(e) => send.error = Some(e.to_string()),
            }
        }

        let transaction = result?;
        tracing::info!(
            transaction_id = %transaction.id,
            wallet_id = %request.wallet_id,
            amount = %request.amount,
            token = %request.token,
            "Transaction submitted"
        );
        self.wallets.fetch().await;
        Ok(transaction)
    }
}

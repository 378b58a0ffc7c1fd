//! # Transactions Store
//!
//! Transaction history. Admins see every user's transactions and can settle
//! stuck ones by hand; the mobile client filters to the signed-in user.

use std::ops::Deref;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use shared::dto::{Sort, Transaction, TransactionFilters, TransactionStatus};

use super::list::{Keyed, ListStore};
use crate::core::error::ApiError;
use crate::core::service::{ListSource, TransactionsApi};

impl Keyed for Transaction {
    fn key(&self) -> &str {
        &self.id
    }
}

#[derive(Clone)]
pub struct TransactionsStore {
    list: ListStore<Transaction, TransactionFilters>,
    api: Arc<dyn TransactionsApi>,
}

impl TransactionsStore {
    pub fn new(source: Arc<dyn ListSource<Transaction, TransactionFilters>>, api: Arc<dyn TransactionsApi>) -> Self {
        Self {
            list: ListStore::new("transactions", source, Sort::desc("createdAt")),
            api,
        }
    }

    /// Restrict to a date window. Either end may be open.
    pub fn set_date_range(&self, start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) {
        self.list.update_filters(|filters| {
            filters.start_date = start;
            filters.end_date = end;
        });
    }

    pub async fn update_status(&self, id: &str, status: TransactionStatus) -> Result<Transaction, ApiError> {
        self.list.apply(self.api.update_transaction_status(id, status)).await
    }
}

impl Deref for TransactionsStore {
    type Target = ListStore<Transaction, TransactionFilters>;

    fn deref(&self) -> &Self::Target {
        &self.list
    }
}
